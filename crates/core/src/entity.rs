//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// Lots, owners and attendants are entities: two lots with the same occupancy
/// are still different lots.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
