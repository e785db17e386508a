//! Layering scheduler
//!
//! Partitions a dependency graph into an ordered sequence of groups using
//! Kahn's algorithm generalized to emit whole layers instead of a single
//! linear order:
//!
//! 1. The frontier starts as every entity with in-degree 0.
//! 2. The frontier is emitted as the next group, in input order.
//! 3. Each placed entity decrements the in-degree of its dependents;
//!    dependents reaching 0 form the next frontier.
//! 4. A frontier that empties while entities remain unplaced means the
//!    remainder is cyclic (or depends on a cycle) - the call fails.
//!
//! Runs in O(V + E). Frontier composition is determined purely by the
//! dependency structure, and ties are broken by input position, so the
//! output is reproducible for identical input in identical order.

use super::dependency_graph::DependencyGraph;
use super::error::{GroupingError, GroupingResult};
use crate::adapter::EntityAdapter;
use tracing::{debug, trace};

/// An ordered sequence of dependency-free groups
///
/// The output partition of a grouping call. Every input entity appears in
/// exactly one group; every in-batch dependency of an entity lives in a
/// strictly earlier group, never the same one. Within a group, entities
/// keep their original input order.
///
/// The engine does not enforce execution order: a registration pipeline
/// consuming this sequence must fully commit group `i` before starting
/// group `i + 1`, while entities within one group are mutually independent
/// and safe to process concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSequence<T> {
    groups: Vec<Vec<T>>,
}

impl<T> GroupSequence<T> {
    fn new(groups: Vec<Vec<T>>) -> Self {
        Self { groups }
    }

    /// Returns the groups in processing order
    pub fn groups(&self) -> &[Vec<T>] {
        &self.groups
    }

    /// Consumes the sequence, returning the groups
    pub fn into_groups(self) -> Vec<Vec<T>> {
        self.groups
    }

    /// Returns the number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the sequence contains no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of entities across all groups
    pub fn entity_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns an iterator over the groups in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<T>> {
        self.groups.iter()
    }
}

impl<T> IntoIterator for GroupSequence<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GroupSequence<T> {
    type Item = &'a Vec<T>;
    type IntoIter = std::slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<T> DependencyGraph<T> {
    /// Partitions the graph into an ordered sequence of groups
    ///
    /// Each group is internally free of in-batch dependencies and depends
    /// only on strictly earlier groups. Entities are never placed later
    /// than their earliest feasible group.
    ///
    /// Returns [`GroupingError::CyclicDependency`] if any entities cannot
    /// be placed; the error lists their codes in input order. No partial
    /// sequence is returned.
    pub fn layer(self) -> GroupingResult<GroupSequence<T>> {
        let DependencyGraph {
            entities,
            codes,
            dependents,
            mut in_degree,
        } = self;

        let total = entities.len();
        if total == 0 {
            return Ok(GroupSequence::new(Vec::new()));
        }

        // Index of the group each entity lands in, filled as layers are
        // peeled off.
        let mut group_of: Vec<Option<usize>> = vec![None; total];
        let mut placed = 0usize;
        let mut rounds = 0usize;

        let mut frontier: Vec<usize> = (0..total).filter(|&i| in_degree[i] == 0).collect();

        while placed < total {
            if frontier.is_empty() {
                let unplaced: Vec<_> = (0..total)
                    .filter(|&i| group_of[i].is_none())
                    .map(|i| codes[i].clone())
                    .collect();
                return Err(GroupingError::cyclic_dependency(unplaced));
            }

            trace!(round = rounds, frontier = frontier.len(), "emitting group");

            let mut next = Vec::new();
            for &i in &frontier {
                group_of[i] = Some(rounds);
                for &dependent in &dependents[i] {
                    in_degree[dependent] -= 1;
                    if in_degree[dependent] == 0 {
                        next.push(dependent);
                    }
                }
            }
            placed += frontier.len();
            rounds += 1;

            // Restore input order among newly eligible entities.
            next.sort_unstable();
            frontier = next;
        }

        // Distribute the owned entities into their groups. Iterating in
        // input order keeps the within-group tie-break order stable.
        let mut groups: Vec<Vec<T>> = (0..rounds).map(|_| Vec::new()).collect();
        for (i, entity) in entities.into_iter().enumerate() {
            // Every entity was assigned a group above, or we returned early.
            if let Some(group) = group_of[i] {
                groups[group].push(entity);
            }
        }

        Ok(GroupSequence::new(groups))
    }
}

/// Groups a batch of entities into a dependency-safe processing order
///
/// Builds the dependency graph via the adapter and layers it in one call.
/// This is the main entry point of the crate.
///
/// # Errors
///
/// - [`GroupingError::DuplicateIdentity`] if two entities share a code.
/// - [`GroupingError::CyclicDependency`] if the batch contains a
///   dependency cycle.
///
/// Both failures reject the whole batch; nothing is partially grouped.
///
/// # Example
///
/// ```
/// use taxis::{group_by_dependencies, EntityCode, FnAdapter};
///
/// let adapter = FnAdapter::new(
///     |e: &(&str, Vec<&str>)| EntityCode::new(e.0),
///     |e: &(&str, Vec<&str>)| e.1.iter().copied().map(EntityCode::new).collect(),
/// );
///
/// let batch = vec![
///     ("S1", vec![]),
///     ("S2", vec!["S1"]),
///     ("S3", vec!["S1", "S2"]),
/// ];
/// let sequence = group_by_dependencies(batch, &adapter).unwrap();
/// let codes: Vec<Vec<&str>> = sequence
///     .iter()
///     .map(|group| group.iter().map(|e| e.0).collect())
///     .collect();
/// assert_eq!(codes, vec![vec!["S1"], vec!["S2"], vec!["S3"]]);
/// ```
pub fn group_by_dependencies<T, A>(entities: Vec<T>, adapter: &A) -> GroupingResult<GroupSequence<T>>
where
    A: EntityAdapter<T>,
{
    let total = entities.len();
    let sequence = DependencyGraph::build(entities, adapter)?.layer()?;
    debug!(
        entities = total,
        groups = sequence.len(),
        "grouped batch by dependencies"
    );
    Ok(sequence)
}
