//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one and replace it wholesale on its owner (an order swaps its
/// delivery method this way).
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`DeliveryMethod`, `DiscountPercent`, `Price`)
/// - **Entity**: Has identity (`Product`: two handles with the same id are the same item)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
