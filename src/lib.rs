//! Taxis: Dependency-Aware Batch Grouping
//!
//! `taxis` (τάξις, Greek for "arrangement, ordering") splits a batch of
//! entities that reference each other into an ordered sequence of groups
//! safe to register one after another. Because an entity's container or
//! parent may itself be a brand-new entity in the same batch, a naive
//! single-pass insert can fail on unresolved references; `taxis` computes a
//! processing order in which every in-batch dependency of an entity already
//! exists by the time its group is processed, while independent entities
//! share a group to maximize batched or parallel registration.
//!
//! # Features
//!
//! - **Layered topological sorting**: Kahn's algorithm emitting whole
//!   layers, O(entities + edges)
//! - **External references**: dependency codes unknown in the batch are
//!   assumed to already exist and never block placement
//! - **Deterministic output**: ties are broken by input position, so the
//!   same input always yields the same group sequence
//! - **Fail-fast validation**: duplicate entity codes and dependency
//!   cycles reject the whole batch with the offending codes named
//! - **Type-agnostic**: entities are adapted through a strategy trait or a
//!   pair of closures; a ready-made sample adapter is included
//!
//! # Quick Start
//!
//! ```
//! use taxis::{group_samples, NewSample};
//!
//! let samples = vec![
//!     NewSample::new("S1"),
//!     NewSample::new("S2").with_container("S1"),
//!     NewSample::new("S3").with_parents(["S1", "S2"]),
//! ];
//!
//! let sequence = group_samples(samples)?;
//!
//! for group in &sequence {
//!     // Register the whole group (entities within a group are mutually
//!     // independent), then move on to the next one.
//!     for sample in group {
//!         println!("registering {}", sample.identifier());
//!     }
//! }
//! # Ok::<(), taxis::GroupingError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`adapter`]: per-entity-type extraction strategies (hides how identity
//!   and dependencies are obtained from a domain type)
//! - [`graph`]: dependency graph building and layering (hides the graph
//!   representation)
//! - [`sample`]: the sample registration entity and its adapter
//!
//! # Scope
//!
//! The engine is a pure, synchronous computation: no I/O, no state beyond
//! one call, safe to invoke concurrently on independent batches. Actual
//! registration, validation of entity content, and retry policy belong to
//! the caller.

pub mod adapter;
pub mod graph;
pub mod sample;

pub use adapter::{EntityAdapter, FnAdapter};
pub use graph::{
    group_by_dependencies, DependencyGraph, EntityCode, GroupSequence, GroupingError,
    GroupingResult,
};
pub use sample::{group_samples, NewSample, SampleAdapter};
