//! Sample registration entities and their grouping adapter
//!
//! The one concrete adapter instantiation shipped with the engine: samples
//! submitted for bulk registration. A sample may live inside a container
//! sample and may have any number of parent samples, and both the container
//! and the parents can themselves be brand-new samples in the same batch.
//! [`SampleAdapter`] folds the container identifier together with all
//! parent identifiers into one dependency set, so [`group_samples`] splits
//! a submission into groups that can be registered in batches one after
//! another, where samples in later groups depend only on samples from
//! earlier groups.

use crate::adapter::EntityAdapter;
use crate::graph::{group_by_dependencies, EntityCode, GroupSequence, GroupingResult};
use serde::{Deserialize, Serialize};

/// A sample submitted for registration
///
/// Identified by its full identifier (e.g. `/SPACE/S1`). The container
/// identifier and the parent identifiers may point at samples in the same
/// submission or at samples that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSample {
    identifier: String,
    container_identifier: Option<String>,
    parent_identifiers: Vec<String>,
}

impl NewSample {
    /// Creates a sample with no container and no parents
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            container_identifier: None,
            parent_identifiers: Vec::new(),
        }
    }

    /// Sets the container identifier
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container_identifier = Some(container.into());
        self
    }

    /// Sets the parent identifiers
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_identifiers = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the sample identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the container identifier if present
    pub fn container_identifier(&self) -> Option<&str> {
        self.container_identifier.as_deref()
    }

    /// Returns the parent identifiers
    pub fn parent_identifiers(&self) -> &[String] {
        &self.parent_identifiers
    }
}

/// Grouping adapter for [`NewSample`]
///
/// Code: the sample identifier. Dependencies: the container identifier,
/// if any, plus all parent identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAdapter;

impl EntityAdapter<NewSample> for SampleAdapter {
    fn code(&self, sample: &NewSample) -> EntityCode {
        EntityCode::new(sample.identifier.as_str())
    }

    fn dependency_codes(&self, sample: &NewSample) -> Vec<EntityCode> {
        let mut codes = Vec::with_capacity(sample.parent_identifiers.len() + 1);
        if let Some(container) = &sample.container_identifier {
            codes.push(EntityCode::new(container));
        }
        codes.extend(
            sample
                .parent_identifiers
                .iter()
                .map(|parent| EntityCode::new(parent.as_str())),
        );
        codes
    }
}

/// Splits samples into dependency-safe registration groups
///
/// Samples in each group depend only on samples from earlier groups or on
/// samples that already exist outside the submission.
pub fn group_samples(samples: Vec<NewSample>) -> GroupingResult<GroupSequence<NewSample>> {
    group_by_dependencies(samples, &SampleAdapter)
}
