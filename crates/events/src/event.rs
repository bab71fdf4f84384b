use chrono::{DateTime, Utc};

/// A recorded fact about a domain object.
///
/// Implementors are plain data: once built they are only read, copied and
/// forwarded. `event_type` and `version` together identify the payload
/// schema for whatever consumes the event outside the domain.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted, stable name (e.g. "catalog.product.updated").
    fn event_type(&self) -> &'static str;

    /// Payload schema version for this event type.
    fn version(&self) -> u32;

    /// UTC time the event was recorded.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// `event_type` qualified with its version, e.g. "catalog.product.updated.v1".
    fn qualified_type(&self) -> String {
        format!("{}.v{}", self.event_type(), self.version())
    }
}
