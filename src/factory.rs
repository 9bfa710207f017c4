//! Extension contracts for vocabulary-specific construction.
//!
//! External vocabularies plug in by registering a factory under their
//! namespace. Lookups that miss are a normal outcome: the construction
//! engine falls back to built-in container types and finally to generic
//! resources and literals, so documents using unrecognized vocabularies
//! stay representable instead of being rejected.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::construct::{Model, OtherHasher, Resource};
use crate::datatype::TypedLiteral;

/// Constructs vocabulary-specific resources for a registered type namespace.
///
/// A factory may abstain by returning `None`, in which case construction
/// falls through to the built-in special cases and the generic resource.
/// Factories allocate identities through the model they are handed.
pub trait ResourceFactory {
    fn create_resource(
        &self,
        model: &mut Model,
        uri: Option<&str>,
        namespace: &str,
        local_name: &str,
    ) -> Option<Resource>;
}

/// Maps lexical forms to materialized values for a registered datatype
/// namespace. Unlike resource factories, a literal factory owns its
/// namespace once matched and cannot abstain.
pub trait TypedLiteralFactory {
    fn create_typed_literal(&self, lexical: &str, datatype: &str) -> TypedLiteral;
}

/// Two independent namespace-keyed factory maps. The last registration for
/// a namespace wins.
pub struct FactoryRegistry {
    resource_factories: HashMap<String, Arc<dyn ResourceFactory>, OtherHasher>,
    literal_factories: HashMap<String, Arc<dyn TypedLiteralFactory>, OtherHasher>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self {
            resource_factories: HashMap::default(),
            literal_factories: HashMap::default(),
        }
    }
    pub fn register_resource_factory(
        &mut self,
        namespace: impl Into<String>,
        factory: Arc<dyn ResourceFactory>,
    ) {
        let namespace = namespace.into();
        info!(%namespace, "registering resource factory");
        self.resource_factories.insert(namespace, factory);
    }
    pub fn unregister_resource_factory(&mut self, namespace: &str) {
        info!(%namespace, "unregistering resource factory");
        self.resource_factories.remove(namespace);
    }
    pub fn register_typed_literal_factory(
        &mut self,
        namespace: impl Into<String>,
        factory: Arc<dyn TypedLiteralFactory>,
    ) {
        let namespace = namespace.into();
        info!(%namespace, "registering typed literal factory");
        self.literal_factories.insert(namespace, factory);
    }
    pub fn unregister_typed_literal_factory(&mut self, namespace: &str) {
        info!(%namespace, "unregistering typed literal factory");
        self.literal_factories.remove(namespace);
    }
    pub fn lookup_resource_factory(&self, namespace: &str) -> Option<Arc<dyn ResourceFactory>> {
        self.resource_factories.get(namespace).cloned()
    }
    /// Exact match first. Vocabularies disagree on whether a namespace ends
    /// in the fragment separator, so a miss retries with a trailing `#`
    /// stripped.
    pub fn lookup_typed_literal_factory(
        &self,
        namespace: &str,
    ) -> Option<Arc<dyn TypedLiteralFactory>> {
        if let Some(factory) = self.literal_factories.get(namespace) {
            return Some(Arc::clone(factory));
        }
        namespace
            .strip_suffix('#')
            .and_then(|stripped| self.literal_factories.get(stripped))
            .cloned()
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
