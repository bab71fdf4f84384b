//! Domain events and the request/response boundary.

pub mod event;
pub mod pending;
pub mod query;

pub use event::Event;
pub use pending::PendingEvents;
pub use query::{Query, QueryHandler};
