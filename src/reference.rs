//! Reverse references and root classification over the kept graph.
//!
//! Both operate read-only over a [`Model`] at any time, independent of
//! construction.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

// resource identities are plain u64 so a bitmap makes a cheap visited set
use roaring::RoaringTreemap;

use tracing::debug;

use crate::construct::{IdHasher, Model, Resource, ResourceId, Value};

/// Reverse-reference index: a resource mapped to the set of resources that
/// hold an edge pointing to it. Resources with no incoming edges do not
/// appear as keys.
pub type ReferenceMap = HashMap<ResourceId, HashSet<ResourceId, IdHasher>, IdHasher>;

/// Reverse references over every resource in the store.
pub fn compute_references(model: &Model) -> ReferenceMap {
    traverse(model, model.resources().map(Resource::id).collect())
}

/// Reverse references over everything reachable from one root.
pub fn compute_references_from(model: &Model, root: ResourceId) -> ReferenceMap {
    traverse(model, vec![root])
}

// One visited set shared across all seeds: a resource is expanded for its
// outgoing edges at most once, while reverse sets still accumulate every
// distinct referrer. The worklist keeps deeply linked graphs off the call
// stack and the visited set terminates cycles.
fn traverse(model: &Model, seeds: Vec<ResourceId>) -> ReferenceMap {
    debug!(seeds = seeds.len(), "computing reverse references");
    let mut references = ReferenceMap::default();
    let mut visited = RoaringTreemap::new();
    let mut worklist = seeds;
    while let Some(id) = worklist.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(resource) = model.resource(id) else {
            continue;
        };
        for pair in resource.properties() {
            if let Value::Resource(target) = pair.value() {
                references.entry(*target).or_default().insert(id);
                worklist.push(*target);
            }
        }
    }
    references
}

/// Decides which resources are interesting enough to sit at the top of a
/// presented hierarchy. A display heuristic, not a structural invariant.
pub trait RootPolicy {
    fn is_root(&self, model: &Model, resource: &Resource) -> bool;
}

/// The provisional default: named with at least one outgoing property, or
/// carrying a human-readable label.
pub struct LabelOrProperties;

impl RootPolicy for LabelOrProperties {
    fn is_root(&self, model: &Model, resource: &Resource) -> bool {
        // Eventually this should probably determine whether the outgoing
        // pairs are actually properties.
        (resource.is_named() && !resource.properties().is_empty())
            || model.label_of(resource.id()).is_some()
    }
}

pub type RootComparator<'a> = &'a dyn Fn(&Resource, &Resource) -> Ordering;

/// Filter the whole store through a root policy. The optional ordering is
/// for display only and has no graph meaning.
pub fn root_resources(
    model: &Model,
    policy: &dyn RootPolicy,
    comparator: Option<RootComparator>,
) -> Vec<ResourceId> {
    let mut roots: Vec<&Resource> = model
        .resources()
        .filter(|resource| policy.is_root(model, resource))
        .collect();
    if let Some(comparator) = comparator {
        roots.sort_by(|a, b| comparator(*a, *b));
    }
    roots.into_iter().map(Resource::id).collect()
}
