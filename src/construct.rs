use std::collections::HashMap;

// used to keep the one-to-one mapping between URIs and named resources
use bimap::BiMap;

use core::hash::BuildHasherDefault;
use seahash::SeaHasher;

use serde::Serialize;

// used to print out readable forms of a construct
use std::fmt;

use tracing::debug;

// our own stuff that we need
use crate::datatype::{Literal, LiteralValue, TypedLiteral, XmlValue};
use crate::error::{ReferentError, Result};
use crate::factory::{FactoryRegistry, ResourceFactory, TypedLiteralFactory};
use crate::vocab::{self, rdf, rdf_names, rdfs};

use std::sync::Arc;

// ------------- ResourceId -------------
// Identity is the id: two resources are the same node only when they carry
// the same id, never through structural equality.
pub type ResourceId = u64;

pub type IdHasher = BuildHasherDefault<SeaHasher>;
pub type OtherHasher = BuildHasherDefault<SeaHasher>;

pub const GENESIS: ResourceId = 0;

#[derive(Debug)]
pub struct IdGenerator {
    lower_bound: ResourceId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            lower_bound: GENESIS,
        }
    }
    pub fn generate(&mut self) -> ResourceId {
        self.lower_bound += 1;
        self.lower_bound
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Resource -------------
/// What a resource is, structurally. The container types are a closed set;
/// vocabulary-specific resources stay `Generic` and are shaped by their
/// factories through properties instead of further variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Generic,
    Bag,
    Seq,
    List,
}

/// A graph node: named when it carries a URI, a blank node otherwise.
/// A resource owns an ordered, possibly repeating list of property/value
/// pairs.
#[derive(Debug, Serialize)]
pub struct Resource {
    resource: ResourceId,
    uri: Option<String>,
    kind: ResourceKind,
    properties: Vec<PropertyValue>,
}

impl Resource {
    pub fn new(resource: ResourceId, uri: Option<String>, kind: ResourceKind) -> Self {
        Self {
            resource,
            uri,
            kind,
            properties: Vec::new(),
        }
    }
    pub fn named(resource: ResourceId, uri: impl Into<String>, kind: ResourceKind) -> Self {
        Self::new(resource, Some(uri.into()), kind)
    }
    pub fn blank(resource: ResourceId, kind: ResourceKind) -> Self {
        Self::new(resource, None, kind)
    }
    pub fn id(&self) -> ResourceId {
        self.resource
    }
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
    pub fn is_named(&self) -> bool {
        self.uri.is_some()
    }
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, ResourceKind::Generic)
    }
    pub fn properties(&self) -> &[PropertyValue] {
        &self.properties
    }
    fn add_property(&mut self, property: ResourceId, value: Value) {
        self.properties.push(PropertyValue { property, value });
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.uri {
            Some(uri) => write!(f, "<{}>", uri),
            None => write!(f, "_:{}", self.resource),
        }
    }
}

// ------------- PropertyValue -------------
/// A directed labeled edge from a resource to another resource or a literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyValue {
    property: ResourceId,
    value: Value,
}

impl PropertyValue {
    pub fn property(&self) -> ResourceId {
        self.property
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Value {
    Resource(ResourceId),
    Literal(Literal),
}

impl Value {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Value::Literal(Literal::plain(lexical))
    }
    pub fn typed(literal: TypedLiteral) -> Self {
        Value::Literal(Literal::Typed(literal))
    }
    pub fn as_resource(&self) -> Option<ResourceId> {
        match self {
            Value::Resource(id) => Some(*id),
            Value::Literal(_) => None,
        }
    }
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Resource(_) => None,
            Value::Literal(literal) => Some(literal),
        }
    }
}

// ------------- ResourceKeeper -------------
/// The store: an identity-keyed map of every resource plus a bidirectional
/// URI index over the named ones.
#[derive(Debug)]
pub struct ResourceKeeper {
    kept: HashMap<ResourceId, Resource, IdHasher>,
    named: BiMap<String, ResourceId>,
}

impl ResourceKeeper {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
            named: BiMap::new(),
        }
    }
    /// Idempotent by identity. A named resource also claims the URI index
    /// entry, displacing any earlier holder of the same URI.
    pub fn keep(&mut self, resource: Resource) -> (ResourceId, bool) {
        let id = resource.id();
        if self.kept.contains_key(&id) {
            return (id, true);
        }
        if let Some(uri) = resource.uri() {
            self.named.insert(uri.to_owned(), id);
        }
        self.kept.insert(id, resource);
        (id, false)
    }
    pub fn get(&self, uri: &str) -> Option<&Resource> {
        self.named
            .get_by_left(uri)
            .and_then(|id| self.kept.get(id))
    }
    pub fn lookup(&self, id: &ResourceId) -> Option<&Resource> {
        self.kept.get(id)
    }
    fn lookup_mut(&mut self, id: &ResourceId) -> Option<&mut Resource> {
        self.kept.get_mut(id)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.kept.values()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

impl Default for ResourceKeeper {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Model -------------
// This sets up the model with the necessary structures
pub struct Model {
    // owns an id generator
    generator: IdGenerator,
    // owns the keeper for all resources
    resources: ResourceKeeper,
    // owns the factory registry consulted during typed construction
    registry: FactoryRegistry,
}

impl Model {
    pub fn new() -> Self {
        Self {
            generator: IdGenerator::new(),
            resources: ResourceKeeper::new(),
            registry: FactoryRegistry::new(),
        }
    }

    /// Hands out a fresh identity. Factories use this to allocate ids for
    /// the resources they construct.
    pub fn generate_id(&mut self) -> ResourceId {
        self.generator.generate()
    }

    // functions to access the store
    pub fn add_resource(&mut self, resource: Resource) -> ResourceId {
        let (id, _previously_kept) = self.resources.keep(resource);
        id
    }
    pub fn get_resource(&self, uri: &str) -> Option<&Resource> {
        self.resources.get(uri)
    }
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.lookup(&id)
    }
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }

    // functions to manage the factory registry
    pub fn register_resource_factory(
        &mut self,
        namespace: impl Into<String>,
        factory: Arc<dyn ResourceFactory>,
    ) {
        self.registry.register_resource_factory(namespace, factory);
    }
    pub fn unregister_resource_factory(&mut self, namespace: &str) {
        self.registry.unregister_resource_factory(namespace);
    }
    pub fn register_typed_literal_factory(
        &mut self,
        namespace: impl Into<String>,
        factory: Arc<dyn TypedLiteralFactory>,
    ) {
        self.registry
            .register_typed_literal_factory(namespace, factory);
    }
    pub fn unregister_typed_literal_factory(&mut self, namespace: &str) {
        self.registry.unregister_typed_literal_factory(namespace);
    }

    /// The existing named resource for `uri`, or a freshly constructed and
    /// kept one. Calling this twice with the same URI returns the same
    /// resource.
    pub fn locate_resource(&mut self, uri: &str) -> ResourceId {
        if let Some(resource) = self.resources.get(uri) {
            return resource.id();
        }
        self.create_typed_resource(Some(uri), None)
    }

    /// An untyped resource, named or blank.
    pub fn create_resource(&mut self, uri: Option<&str>) -> ResourceId {
        self.create_typed_resource(uri, None)
    }

    /// Construct a resource for `uri` with an optional type. The registered
    /// factory for the type namespace is consulted first, then the built-in
    /// special cases, then the generic fallback; the result is always kept.
    /// A supplied type is attached as an `rdf:type` edge afterwards, also
    /// when the resource itself pre-existed.
    pub fn create_typed_resource(
        &mut self,
        uri: Option<&str>,
        type_uri: Option<&str>,
    ) -> ResourceId {
        let (namespace, local_name) = match type_uri {
            Some(type_uri) => vocab::split_uri(type_uri),
            None => ("", ""),
        };
        let id = match self.create_typed_resource_from_factory(uri, namespace, local_name) {
            Some(id) => id,
            None => {
                debug!(uri = uri.unwrap_or("_"), "constructing generic resource");
                let id = self.generator.generate();
                self.add_resource(Resource::new(id, uri.map(str::to_owned), ResourceKind::Generic))
            }
        };
        if let Some(type_uri) = type_uri {
            let type_resource = self.locate_resource(type_uri);
            let type_property = self.locate_resource(rdf::TYPE);
            // re-typing is additive; an existing resource accumulates type edges
            if let Some(resource) = self.resources.lookup_mut(&id) {
                resource.add_property(type_property, Value::Resource(type_resource));
            }
        }
        id
    }

    /// Factory-or-builtin construction without a type assertion. `None`
    /// means neither a registered factory nor a built-in special case
    /// produced a resource, and the caller decides the fallback.
    pub fn create_typed_resource_from_factory(
        &mut self,
        uri: Option<&str>,
        namespace: &str,
        local_name: &str,
    ) -> Option<ResourceId> {
        if let Some(factory) = self.registry.lookup_resource_factory(namespace) {
            if let Some(resource) = factory.create_resource(self, uri, namespace, local_name) {
                debug!(namespace, local_name, "resource from registered factory");
                return Some(self.add_resource(resource));
            }
        }
        if uri == Some(rdf::NIL) {
            // the canonical empty list; the store holds a single nil resource
            if let Some(existing) = self.resources.get(rdf::NIL) {
                return Some(existing.id());
            }
            let id = self.generator.generate();
            return Some(self.add_resource(Resource::named(id, rdf::NIL, ResourceKind::List)));
        }
        if namespace == rdf::NS {
            let kind = match local_name {
                rdf_names::BAG => Some(ResourceKind::Bag),
                rdf_names::SEQ => Some(ResourceKind::Seq),
                rdf_names::LIST => Some(ResourceKind::List),
                _ => None,
            };
            if let Some(kind) = kind {
                let id = self.generator.generate();
                return Some(self.add_resource(Resource::new(id, uri.map(str::to_owned), kind)));
            }
        }
        None
    }

    /// A typed literal for `lexical`. The datatype is required; everything
    /// else falls back silently, first to the XML literal special case and
    /// finally to a literal keeping the lexical form verbatim as its value.
    pub fn create_typed_literal(
        &self,
        lexical: &str,
        datatype: Option<&str>,
    ) -> Result<TypedLiteral> {
        let datatype = datatype.ok_or_else(|| {
            ReferentError::InvalidArgument(String::from("a typed literal requires a datatype"))
        })?;
        let (namespace, _) = vocab::split_uri(datatype);
        if let Some(factory) = self.registry.lookup_typed_literal_factory(namespace) {
            return Ok(factory.create_typed_literal(lexical, datatype));
        }
        if datatype == rdf::XML_LITERAL {
            return Ok(TypedLiteral::new(
                lexical,
                datatype,
                LiteralValue::Xml(XmlValue::new(lexical)),
            ));
        }
        debug!(datatype, "no literal factory, keeping lexical form verbatim");
        Ok(TypedLiteral::new(
            lexical,
            datatype,
            LiteralValue::String(lexical.to_owned()),
        ))
    }

    /// Append a property/value pair to a kept resource. Handing in an id
    /// the store has never seen is a contract violation.
    pub fn add_property(
        &mut self,
        subject: ResourceId,
        property: ResourceId,
        value: Value,
    ) -> Result<()> {
        match self.resources.lookup_mut(&subject) {
            Some(resource) => {
                resource.add_property(property, value);
                Ok(())
            }
            None => Err(ReferentError::Invariant(format!(
                "unknown subject resource {subject}"
            ))),
        }
    }

    /// The first `rdfs:label` value that is a literal. Label edges pointing
    /// at resources carry no printable text and are skipped.
    pub fn label_of(&self, id: ResourceId) -> Option<&str> {
        let resource = self.resource(id)?;
        for pair in resource.properties() {
            let Some(property) = self.resource(pair.property()) else {
                continue;
            };
            if property.uri() == Some(rdfs::LABEL) {
                if let Value::Literal(literal) = pair.value() {
                    return Some(literal.lexical());
                }
            }
        }
        None
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
