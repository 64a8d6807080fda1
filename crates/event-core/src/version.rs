//! Aggregate versions and optimistic concurrency checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Version number of an aggregate, used for optimistic concurrency control.
///
/// A fresh aggregate sits at version 0; every applied event moves the
/// counter by exactly one, whether the event was just raised by a command or
/// replayed from stored history. The version therefore always equals the
/// number of events applied so far.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(i64);

impl Version {
    /// Creates a version from a raw value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The version of an aggregate with no events applied.
    pub fn initial() -> Self {
        Self(0)
    }

    /// The version an aggregate reaches after its first event.
    pub fn first() -> Self {
        Self(1)
    }

    /// The next version.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Version {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// What a writer expects an aggregate's durable version to be.
///
/// The persistence collaborator compares this against the last stored
/// version before appending new events; a mismatch means another writer got
/// there first and the command should be retried against fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Append without checking. For writers that tolerate interleaving.
    Any,
    /// Append only if the stored version is exactly this one.
    Exact(Version),
}

impl ExpectedVersion {
    /// Returns true when the actual version satisfies the expectation.
    pub fn matches(self, actual: Version) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(expected) => expected == actual,
        }
    }

    /// Checks the expectation, reporting a conflict as a domain error.
    pub fn check(self, actual: Version) -> DomainResult<()> {
        match self {
            ExpectedVersion::Any => Ok(()),
            ExpectedVersion::Exact(expected) if expected == actual => Ok(()),
            ExpectedVersion::Exact(expected) => Err(DomainError::new(format!(
                "version conflict: expected {expected}, actual {actual}"
            ))),
        }
    }
}
