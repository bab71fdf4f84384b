//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attributes. They
/// are immutable: "changing" one means building a new instance and replacing
/// the old one where it is held.
///
/// - **Value Object**: `Money { amount: 100, currency: "USD" }`
/// - **Entity**: `Product { id: ProductId(...), name: "..." }`
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
