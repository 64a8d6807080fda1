//! Engine for event-sourced aggregates.
//!
//! Aggregates built on this crate never store current state directly; they
//! raise domain events and fold them into state, so the full history of an
//! aggregate can rebuild it field for field. The crate provides:
//!
//! - [`Aggregate`] and [`DomainEvent`] traits with the raise/apply/replay
//!   contract, plus [`AggregateRoot`] holding the uncommitted-event list and
//!   version counter every aggregate embeds
//! - [`Version`] and [`ExpectedVersion`] for optimistic concurrency control
//! - [`IdSource`] so identifier minting is an explicit collaborator rather
//!   than ambient randomness inside command handlers
//! - [`Arena`] insertion-ordered storage for sub-entities owned by a root
//! - [`DomainError`], the single error kind every rejected command maps to

pub mod aggregate;
pub mod arena;
pub mod error;
pub mod ids;
pub mod version;

pub use aggregate::{Aggregate, AggregateRoot, DomainEvent};
pub use arena::Arena;
pub use error::{DomainError, DomainResult};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use version::{ExpectedVersion, Version};
