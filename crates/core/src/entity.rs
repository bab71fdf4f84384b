//! Entity trait: identity + continuity across state changes.

use crate::id::Identifier;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Identifier;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the entity still carries the empty identifier.
    fn is_transient(&self) -> bool {
        self.id().is_empty()
    }

    /// Identity comparison: both identifiers non-empty and equal.
    ///
    /// Same kind is enforced by the type system (`Self`). Entities with the
    /// empty identifier never match, not even themselves.
    fn same_identity(&self, other: &Self) -> bool {
        !self.is_transient() && !other.is_transient() && self.id() == other.id()
    }
}

/// Implement `PartialEq` for an entity in terms of [`Entity::same_identity`].
///
/// Deliberately no `Eq`: the empty sentinel makes the relation non-reflexive.
#[macro_export]
macro_rules! impl_entity_eq {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::same_identity(self, other)
            }
        }
    };
}
