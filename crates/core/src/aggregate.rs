//! Aggregate root trait for domain models that guard cross-member invariants.

/// Aggregate root marker + minimal interface.
///
/// The aggregate root is the only entry point allowed to mutate its members,
/// so every business rule spanning those members is checked in one place.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successfully applied mutation; rejected
    /// mutations leave it untouched.
    fn version(&self) -> u64;
}
