//! Aggregate root trait for domain models that queue change notifications.

use crate::entity::Entity;

/// Aggregate root: the consistency boundary for its contained values.
///
/// Aggregates never publish anything themselves. Mutating methods append to
/// a pending queue; the caller reads [`pending_events`](Self::pending_events),
/// forwards them, then calls [`clear_domain_events`](Self::clear_domain_events).
pub trait AggregateRoot: Entity {
    /// Notification type queued by this aggregate.
    type Event: Clone + core::fmt::Debug;

    /// Read-only view of notifications not yet drained.
    ///
    /// Aggregates that never raise notifications keep the default.
    fn pending_events(&self) -> &[Self::Event] {
        &[]
    }

    /// Drop every pending notification. This is the only way the queue shrinks.
    fn clear_domain_events(&mut self) {}
}
