//! Dependency graph builder
//!
//! Turns a batch of entities into an edge/in-degree view suitable for
//! layered topological sorting. The graph is built fresh for every
//! grouping call, is immutable once built, and is never persisted.
//!
//! # Design
//!
//! Entities are kept in input order and referred to by index everywhere
//! else; codes only matter while resolving declared dependencies against
//! the batch and when reporting errors. The graph stores the *reverse*
//! adjacency (for each entity, who depends on it), which is exactly what
//! the scheduler needs to decrement in-degrees when a group is emitted.
//! Forward edges are never materialized; the in-degree counter stands in
//! for them.

use super::error::{GroupingError, GroupingResult};
use super::EntityCode;
use crate::adapter::EntityAdapter;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A batch of entities with their resolved in-batch dependencies
///
/// Built by [`DependencyGraph::build`], consumed by
/// [`DependencyGraph::layer`](crate::graph::DependencyGraph::layer).
/// Dependency codes that match no entity in the batch are treated as
/// references to pre-existing entities: they contribute no edge and never
/// block placement.
#[derive(Debug, Clone)]
pub struct DependencyGraph<T> {
    /// Entities in original input order
    pub(super) entities: Vec<T>,
    /// Code of each entity, parallel to `entities`
    pub(super) codes: Vec<EntityCode>,
    /// Reverse adjacency: `dependents[i]` lists the entities that depend
    /// on entity `i`, each in ascending input order
    pub(super) dependents: Vec<Vec<usize>>,
    /// Number of in-batch dependencies of each entity
    pub(super) in_degree: Vec<usize>,
}

impl<T> DependencyGraph<T> {
    /// Builds the dependency graph for a batch
    ///
    /// Resolves every declared dependency code against the batch. A code
    /// that matches another entity in the batch becomes an edge; a code
    /// that matches nothing is ignored. Repeated codes within one entity's
    /// dependency set count once.
    ///
    /// Returns [`GroupingError::DuplicateIdentity`] if two entities share
    /// a code - ambiguous identity makes grouping unsound.
    pub fn build<A>(entities: Vec<T>, adapter: &A) -> GroupingResult<Self>
    where
        A: EntityAdapter<T>,
    {
        let codes: Vec<EntityCode> = entities.iter().map(|e| adapter.code(e)).collect();

        let mut index: HashMap<&EntityCode, usize> = HashMap::with_capacity(codes.len());
        for (i, code) in codes.iter().enumerate() {
            if index.insert(code, i).is_some() {
                return Err(GroupingError::duplicate_identity(code.clone()));
            }
        }

        let mut dependents = vec![Vec::new(); entities.len()];
        let mut in_degree = vec![0usize; entities.len()];
        let mut edges = 0usize;

        for (i, entity) in entities.iter().enumerate() {
            let mut resolved: HashSet<usize> = HashSet::new();
            for code in adapter.dependency_codes(entity) {
                let Some(&dep) = index.get(&code) else {
                    // Not in the batch: an external reference, already
                    // satisfied by definition.
                    continue;
                };
                if resolved.insert(dep) {
                    dependents[dep].push(i);
                    in_degree[i] += 1;
                    edges += 1;
                }
            }
        }

        trace!(
            entities = entities.len(),
            edges,
            "built dependency graph for batch"
        );

        Ok(Self {
            entities,
            codes,
            dependents,
            in_degree,
        })
    }

    /// Returns the number of entities in the batch
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the number of in-batch dependency edges
    pub fn edge_count(&self) -> usize {
        self.in_degree.iter().sum()
    }
}
