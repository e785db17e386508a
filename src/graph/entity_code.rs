//! Entity identity type
//!
//! This module defines the EntityCode type which uniquely identifies an
//! entity within a single grouping call. Codes come straight from the
//! submitted batch (e.g. a sample identifier), which keeps dependency
//! declarations human-readable and error messages actionable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an entity within one batch
///
/// An `EntityCode` is the string by which entities in a batch refer to each
/// other (a sample identifier, a material code, ...). It must be unique
/// within one grouping call; uniqueness is enforced by the graph builder,
/// not by this type.
///
/// # Examples
///
/// ```
/// use taxis::EntityCode;
///
/// let code = EntityCode::new("/SPACE/S1");
/// assert_eq!(code.as_str(), "/SPACE/S1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityCode(String);

impl EntityCode {
    /// Creates a new code from any string-like value
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityCode({})", self.0)
    }
}

impl From<&str> for EntityCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for EntityCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
