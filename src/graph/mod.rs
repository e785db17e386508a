//! Dependency graph and layering scheduler for batch registration
//!
//! This module turns a batch of entities that may reference each other into
//! an ordered sequence of groups safe to register one after another:
//!
//! - Identity indexing with duplicate-code detection
//! - Dependency resolution against the batch (codes not found are external
//!   references, assumed already satisfied)
//! - Layered topological sorting (Kahn's algorithm emitting whole layers)
//! - Cycle detection naming the entities that could not be placed
//!
//! # Design Principles
//!
//! The module hides the graph representation (index-based reverse adjacency
//! lists) and exposes only the build/layer operations. All structures are
//! request-scoped: built, consumed, and discarded within a single grouping
//! call, with no shared state between calls.

mod dependency_graph;
mod entity_code;
mod error;
mod layering;

pub use dependency_graph::DependencyGraph;
pub use entity_code::EntityCode;
pub use error::{GroupingError, GroupingResult};
pub use layering::{group_by_dependencies, GroupSequence};
