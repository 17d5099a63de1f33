// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker registry.
//!
//! The host knows an ordered list of repository types. Tracker plug-ins register
//! a factory under a tracker identifier; a tracker is available when a factory's
//! identifier matches one of the repository types.

use std::fmt;
use std::sync::Arc;

use crate::tracker::IssueTracker;

/// A repository type known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryType {
    pub name: String,
}

impl RepositoryType {
    pub fn new(name: impl Into<String>) -> Self {
        RepositoryType { name: name.into() }
    }
}

impl From<&str> for RepositoryType {
    fn from(name: &str) -> Self {
        RepositoryType::new(name)
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builds trackers for one tracker identifier.
pub trait IssueTrackerFactory: Send + Sync {
    fn tracker_id(&self) -> &str;

    fn create_tracker(&self, repository_type: &RepositoryType) -> Arc<dyn IssueTracker>;
}

/// Resolves trackers from the registered factories.
///
/// Construction is side-effect free, so trackers are built on every lookup.
pub struct IssueTrackerProvider {
    repository_types: Vec<RepositoryType>,
    factories: Vec<Box<dyn IssueTrackerFactory>>,
}

impl IssueTrackerProvider {
    pub fn new(repository_types: Vec<RepositoryType>) -> Self {
        IssueTrackerProvider {
            repository_types,
            factories: Vec::new(),
        }
    }

    /// Adds a factory (builder pattern).
    pub fn with_factory(mut self, factory: Box<dyn IssueTrackerFactory>) -> Self {
        self.register(factory);
        self
    }

    pub fn register(&mut self, factory: Box<dyn IssueTrackerFactory>) {
        tracing::debug!(tracker = factory.tracker_id(), "registered issue tracker factory");
        self.factories.push(factory);
    }

    pub fn repository_types(&self) -> &[RepositoryType] {
        &self.repository_types
    }

    /// Every tracker with a factory, in repository-type order.
    ///
    /// Repository types without a factory are skipped.
    pub fn provide_all(&self) -> Vec<Arc<dyn IssueTracker>> {
        self.repository_types
            .iter()
            .filter_map(|repository_type| self.create_tracker(repository_type))
            .collect()
    }

    /// The tracker whose identifier is exactly `name`.
    pub fn provide_by_repository_name(&self, name: &str) -> Option<Arc<dyn IssueTracker>> {
        self.repository_types
            .iter()
            .find(|repository_type| repository_type.name == name)
            .and_then(|repository_type| self.create_tracker(repository_type))
    }

    fn create_tracker(&self, repository_type: &RepositoryType) -> Option<Arc<dyn IssueTracker>> {
        self.factories
            .iter()
            .find(|factory| factory.tracker_id() == repository_type.name)
            .map(|factory| factory.create_tracker(repository_type))
    }
}

impl fmt::Debug for IssueTrackerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueTrackerProvider")
            .field("repository_types", &self.repository_types)
            .field(
                "factories",
                &self
                    .factories
                    .iter()
                    .map(|factory| factory.tracker_id())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
