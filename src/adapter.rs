//! Entity adapters - per-type identity and dependency extraction
//!
//! The grouping engine is generic over the entity type. What it needs from
//! an entity is captured by [`EntityAdapter`]: its unique code inside the
//! batch, and the codes it depends on. For samples that means the sample
//! identifier, and the container identifier folded together with all parent
//! identifiers.
//!
//! # Design
//!
//! The adapter is a strategy object supplied alongside the entities rather
//! than a trait the entity type has to implement itself. This keeps the
//! layering algorithm entity-type-agnostic and lets callers group foreign
//! types they cannot add impls to, either with a small adapter struct or
//! with a pair of closures via [`FnAdapter`].

use crate::graph::EntityCode;

/// Extraction strategy for one entity type
///
/// Both methods must be pure: no side effects, and stable results for the
/// duration of one grouping call. The engine calls them once per entity.
///
/// # Contract
///
/// - [`code`](Self::code) returns the entity's identity, unique within the
///   batch (uniqueness is checked by the graph builder, which fails with
///   [`DuplicateIdentity`](crate::GroupingError::DuplicateIdentity)).
/// - [`dependency_codes`](Self::dependency_codes) returns zero or more
///   codes the entity depends on. Codes that match no entity in the batch
///   are treated as references to pre-existing entities and ignored.
pub trait EntityAdapter<T> {
    /// Returns the entity's unique code within the batch
    fn code(&self, entity: &T) -> EntityCode;

    /// Returns the codes this entity depends on (possibly empty)
    fn dependency_codes(&self, entity: &T) -> Vec<EntityCode>;
}

/// An adapter built from two closures
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
/// let batch = vec![("b", vec!["a"]), ("a", vec![])];
/// let groups = group_by_dependencies(batch, &adapter).unwrap();
/// assert_eq!(groups.len(), 2);
/// ```
pub struct FnAdapter<C, D> {
    code_fn: C,
    deps_fn: D,
}

impl<C, D> FnAdapter<C, D> {
    /// Creates an adapter from a code extractor and a dependency extractor
    pub fn new(code_fn: C, deps_fn: D) -> Self {
        Self { code_fn, deps_fn }
    }
}

impl<T, C, D> EntityAdapter<T> for FnAdapter<C, D>
where
    C: Fn(&T) -> EntityCode,
    D: Fn(&T) -> Vec<EntityCode>,
{
    fn code(&self, entity: &T) -> EntityCode {
        (self.code_fn)(entity)
    }

    fn dependency_codes(&self, entity: &T) -> Vec<EntityCode> {
        (self.deps_fn)(entity)
    }
}
