//! Referent – an in-memory resource model for RDF-style graphs.
//!
//! The model centers on the *resource*: a graph node that is either *named*
//! (it carries a URI) or *blank* (identified only by the
//! [`construct::ResourceId`] the store assigned to it). A resource owns an
//! ordered, possibly repeating list of property/value pairs, where:
//! * A [`construct::ResourceId`] is an opaque identity (a simple `u64`).
//! * A property is itself a resource, named by its URI.
//! * A [`construct::Value`] is another resource (a graph edge) or a
//!   [`datatype::Literal`].
//!
//! Resources are owned and indexed by a keeper structure inside the
//! [`construct::Model`], which also owns the id generator and the
//! [`factory::FactoryRegistry`] consulted during typed construction.
//!
//! ## Modules
//! * [`construct`] – Identities, resources, the keeper and the [`construct::Model`] facade.
//! * [`datatype`] – Plain and typed literals and their materialized values.
//! * [`factory`] – Extension contracts and the namespace-keyed registry.
//! * [`vocab`] – RDF / RDFS / XML Schema constants and URI splitting.
//! * [`schema`] – The XML Schema datatype literal factory.
//! * [`reference`] – Reverse-reference computation and root classification.
//!
//! ## Construction
//! Callers go through [`construct::Model::locate_resource`] and
//! [`construct::Model::create_typed_resource`]. Typed construction consults
//! the registered factory for the type namespace, then the built-in
//! container special cases (`rdf:nil`, `Bag`, `Seq`, `List`), and finally
//! falls back to a generic resource. Unknown vocabularies are never an
//! error; documents using them stay representable as generic resources and
//! literals.
//!
//! ## Extension
//! Vocabulary-specific modules register a [`factory::ResourceFactory`] or
//! [`factory::TypedLiteralFactory`] for their namespace once at setup time,
//! the way [`schema::register_xsd_datatypes`] does for the XML Schema
//! datatypes.
//!
//! ## Reading the graph
//! [`reference::compute_references`] builds the reverse-reference index over
//! arbitrary, possibly cyclic, graphs with a single shared visited set, and
//! [`reference::root_resources`] classifies presentation roots through a
//! pluggable [`reference::RootPolicy`].
//!
//! ## Quick Start
//! ```
//! use referent::construct::{Model, Value};
//! use referent::vocab::rdfs;
//!
//! let mut model = Model::new();
//! let document = model.locate_resource("http://example.org/doc");
//! let label = model.locate_resource(rdfs::LABEL);
//! model.add_property(document, label, Value::plain("An example document")).unwrap();
//! assert_eq!(model.resource_count(), 2);
//! assert_eq!(model.label_of(document), Some("An example document"));
//! ```
//!
//! ## Concurrency
//! The model is single-threaded by design: keepers, registry and property
//! lists are plain mutable collections behind `&mut Model`, and no
//! operation suspends, blocks or performs I/O. Callers that need sharing
//! add their own locking around the whole model.

pub mod construct;
pub mod datatype;
pub mod error;
pub mod factory;
pub mod reference;
pub mod schema;
pub mod vocab;
