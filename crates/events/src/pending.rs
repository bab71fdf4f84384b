//! Pending domain events held on an aggregate until the caller drains them.
//!
//! This is **deferred message passing**, not a bus: nothing is published from
//! inside the domain. The application service that owns the aggregate reads
//! the queue after its mutations, forwards each event to whatever integration
//! mechanism exists, then clears the queue.
//!
//! ## Ordering
//!
//! Events are kept in the order they were recorded. Mutating aggregate
//! methods only ever append; the queue shrinks only through [`PendingEvents::clear`]
//! or [`PendingEvents::take`], both of which are explicit caller actions.

/// Append-only queue of events recorded by an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvents<E> {
    events: Vec<E>,
}

impl<E> PendingEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the end of the queue.
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Read-only view, oldest first.
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Drain the queue, handing the events to the caller.
    pub fn take(&mut self) -> Vec<E> {
        core::mem::take(&mut self.events)
    }
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<'a, E> IntoIterator for &'a PendingEvents<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
