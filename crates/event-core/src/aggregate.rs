//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

use crate::version::Version;

/// Trait for domain events.
///
/// Domain events are immutable facts named in past tense. They are the only
/// way aggregate state ever changes.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// Used for serialization and event store filtering.
    fn event_type(&self) -> &'static str;
}

/// Engine state embedded in every event-sourced aggregate.
///
/// Holds the ordered list of events raised since the last persistence
/// hand-off plus the version counter. The counter moves by exactly one per
/// applied event, so it always equals the number of events applied so far.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRoot<E> {
    uncommitted: Vec<E>,
    version: Version,
}

// Not derived: the derive would demand Default from the event type.
impl<E> Default for AggregateRoot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AggregateRoot<E> {
    /// Creates an empty root at version 0.
    pub fn new() -> Self {
        Self {
            uncommitted: Vec::new(),
            version: Version::initial(),
        }
    }

    /// Current version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Events raised since the last hand-off, in raise order.
    pub fn uncommitted(&self) -> &[E] {
        &self.uncommitted
    }

    /// Removes and returns the uncommitted events.
    pub fn take_uncommitted(&mut self) -> Vec<E> {
        std::mem::take(&mut self.uncommitted)
    }

    /// Drops the uncommitted events.
    pub fn clear_uncommitted(&mut self) {
        self.uncommitted.clear();
    }

    fn record(&mut self, event: E) {
        self.uncommitted.push(event);
        self.version = self.version.next();
    }

    fn advance(&mut self) {
        self.version = self.version.next();
    }
}

/// Trait for event-sourced aggregates.
///
/// An aggregate is a consistency boundary: a root plus the sub-entities it
/// owns, mutated only through the root's command methods. Commands validate
/// intent against current state and raise events on success; [`apply`]
/// folds each event into state. Replaying the full history through the same
/// fold rebuilds the aggregate field for field.
///
/// [`apply`]: Aggregate::apply
pub trait Aggregate: Default + Send + Sync + Sized {
    /// The type of events this aggregate raises and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate type name, used for event store organization.
    fn aggregate_type() -> &'static str;

    /// Read access to the embedded engine state.
    fn root(&self) -> &AggregateRoot<Self::Event>;

    /// Mutable access to the embedded engine state.
    fn root_mut(&mut self) -> &mut AggregateRoot<Self::Event>;

    /// Applies an event to the aggregate, updating its state.
    ///
    /// Must be a pure fold: same state and same event give the same result,
    /// with no side effects and no failure path. Events are facts that
    /// already happened; validation belongs in the command that raised them.
    fn apply(&mut self, event: Self::Event);

    /// Raises a new event: records it as uncommitted, bumps the version and
    /// folds it into state immediately.
    ///
    /// Because the fold happens inside the raise, a later raise within the
    /// same command already observes the updated state. There is never an
    /// event that is pending but not yet applied.
    fn raise(&mut self, event: Self::Event) {
        tracing::trace!(
            aggregate = Self::aggregate_type(),
            event = event.event_type(),
            "raising event"
        );
        self.root_mut().record(event.clone());
        self.apply(event);
    }

    /// Current version: the number of events applied so far.
    fn version(&self) -> Version {
        self.root().version()
    }

    /// Events raised since the last persistence hand-off, in raise order.
    fn uncommitted_events(&self) -> &[Self::Event] {
        self.root().uncommitted()
    }

    /// Removes and returns the uncommitted events.
    ///
    /// The persistence collaborator calls this (or
    /// [`clear_uncommitted_events`]) once the events are durable. Until
    /// then the aggregate keeps carrying them.
    ///
    /// [`clear_uncommitted_events`]: Aggregate::clear_uncommitted_events
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        self.root_mut().take_uncommitted()
    }

    /// Drops the uncommitted events without returning them.
    fn clear_uncommitted_events(&mut self) {
        self.root_mut().clear_uncommitted();
    }

    /// Rebuilds an aggregate by folding an ordered event history.
    ///
    /// Replay goes through [`apply`] alone. No event is recorded as
    /// uncommitted and none is raised, so the result carries the history's
    /// version and an empty uncommitted list.
    ///
    /// [`apply`]: Aggregate::apply
    fn replay<I>(history: I) -> Self
    where
        I: IntoIterator<Item = Self::Event>,
    {
        let mut aggregate = Self::default();
        for event in history {
            aggregate.root_mut().advance();
            aggregate.apply(event);
        }
        tracing::debug!(
            aggregate = Self::aggregate_type(),
            version = aggregate.version().as_i64(),
            "rebuilt aggregate from history"
        );
        aggregate
    }
}
