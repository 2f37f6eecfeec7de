//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records held by the stores are entities: two records with the same id are
/// the same record, whatever their accumulated state.
pub trait Entity {
    /// Identifier the owning store keys the record by.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
