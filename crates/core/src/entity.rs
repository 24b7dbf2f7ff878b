//! Entity trait: identity within a table snapshot.

use std::collections::HashSet;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first identifier that appears more than once in `entities`.
pub fn first_duplicate_id<'a, E, I>(entities: I) -> Option<&'a E::Id>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    entities.into_iter().map(|e| e.id()).find(|id| !seen.insert(*id))
}
