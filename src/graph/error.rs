//! Error types for grouping operations
//!
//! This module hides error representation details and provides a unified
//! error type for the whole grouping call. Both kinds are terminal: no
//! partial group sequence is ever returned alongside an error.

use super::EntityCode;
use thiserror::Error;

/// Result type for grouping operations
pub type GroupingResult<T> = Result<T, GroupingError>;

/// Errors that can fail a grouping call
///
/// A dependency code that does not match any entity in the batch is *not*
/// an error: it is treated as a reference to an already-existing entity
/// outside the batch and never blocks placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GroupingError {
    /// Two entities in the batch share the same code
    #[error("duplicate entity code in batch: {code}")]
    DuplicateIdentity {
        /// The code claimed by more than one entity
        code: EntityCode,
    },

    /// The remaining entities form or depend on a dependency cycle
    #[error("cyclic dependency among entities: {}", codes_list(.codes))]
    CyclicDependency {
        /// Codes of every entity that could not be placed, in input order.
        /// A superset of the cycle itself: chains hanging off the cycle
        /// are unplaceable too.
        codes: Vec<EntityCode>,
    },
}

impl GroupingError {
    /// Creates a duplicate identity error
    pub fn duplicate_identity(code: EntityCode) -> Self {
        Self::DuplicateIdentity { code }
    }

    /// Creates a cyclic dependency error
    pub fn cyclic_dependency(codes: Vec<EntityCode>) -> Self {
        Self::CyclicDependency { codes }
    }
}

fn codes_list(codes: &[EntityCode]) -> String {
    codes
        .iter()
        .map(EntityCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
