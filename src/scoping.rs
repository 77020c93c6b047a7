//! Scopings: ordered entity-id sets restricting an operation.

use indexmap::IndexSet;

use crate::types::EntityId;

/// Kind of entity a scoping refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopingLocation {
    /// Node ids.
    Nodal,
    /// Element ids.
    Elemental,
}

/// An explicit, ordered subset of mesh entities.
///
/// The id order is meaningful: operations restricted by a scoping emit
/// their results in scoping order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoping {
    location: ScopingLocation,
    ids: IndexSet<EntityId>,
}

impl Scoping {
    /// Create an empty scoping.
    pub fn new(location: ScopingLocation) -> Self {
        Self {
            location,
            ids: IndexSet::new(),
        }
    }

    /// Create a nodal scoping from ids, keeping first-occurrence order.
    pub fn nodal(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            location: ScopingLocation::Nodal,
            ids: ids.into_iter().collect(),
        }
    }

    /// Create an elemental scoping from ids.
    pub fn elemental(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            location: ScopingLocation::Elemental,
            ids: ids.into_iter().collect(),
        }
    }

    /// Entity kind this scoping refers to.
    pub fn location(&self) -> ScopingLocation {
        self.location
    }

    /// Add an id, ignoring duplicates.
    pub fn push(&mut self, id: EntityId) {
        self.ids.insert(id);
    }

    /// Whether the scoping contains the given id.
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in scoping order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the scoping is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
