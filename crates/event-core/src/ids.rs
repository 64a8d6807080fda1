//! Identifier minting as an explicit collaborator.

use uuid::Uuid;

/// Source of fresh identifiers for aggregates and their owned sub-entities.
///
/// Commands mint ids through this trait and record them in the events they
/// raise. The apply step only ever copies ids out of event payloads, so
/// replaying a stored history never touches a source of randomness and
/// always reproduces the same entity ids.
pub trait IdSource {
    /// Returns the next fresh identifier.
    fn next_id(&mut self) -> Uuid;
}

/// Production source backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl RandomIds {
    /// Creates a random id source.
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic source handing out sequential identifiers, starting at 1.
///
/// Meant for tests and tooling that need reproducible ids. Never yields the
/// nil UUID, which reference validation treats as absent.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    /// Creates a source whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source whose first id is `first`.
    pub fn starting_at(first: u128) -> Self {
        Self {
            last: first.saturating_sub(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.last += 1;
        Uuid::from_u128(self.last)
    }
}
