//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities stay the same thing while their attributes change: a product whose
/// price is updated is still the product every position refers to.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
