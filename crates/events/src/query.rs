/// A read request producing one typed response (query abstraction).
///
/// Queries never change state. The catalog's entities are the payloads and
/// results of queries; the dispatch mechanism itself lives outside the domain.
pub trait Query: Clone + core::fmt::Debug + Send + Sync + 'static {
    type Response;
}

/// Answers one query type.
///
/// This trait is intentionally generic and makes **no storage assumptions**.
/// Errors are handler-specific; therefore the error type is associated.
pub trait QueryHandler<Q: Query> {
    type Error: core::fmt::Debug;

    fn handle(&self, query: Q) -> Result<Q::Response, Self::Error>;
}
