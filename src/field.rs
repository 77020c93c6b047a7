//! Fields: per-entity value vectors at a fixed result location.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::mesh::MeshedRegion;
use crate::types::EntityId;

/// Physical location of a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// One value vector per (element, local node) pair, before averaging.
    ElementalNodal,
    /// One value vector per node.
    Nodal,
    /// One value vector per element.
    Elemental,
}

impl Location {
    /// Human-readable location name.
    pub fn as_str(self) -> &'static str {
        match self {
            Location::ElementalNodal => "ElementalNodal",
            Location::Nodal => "Nodal",
            Location::Elemental => "Elemental",
        }
    }
}

/// A result field: entity id -> value vector, tagged with a location.
///
/// For an `ElementalNodal` field the entity ids are element ids and each
/// entry holds one value vector per local node, flattened
/// (`local node count * n_components` values, local node order matching the
/// element connectivity). For `Nodal` and `Elemental` fields each entry
/// holds exactly `n_components` values.
///
/// A field may carry its own mesh support; operations that need geometry
/// use it in preference to an externally supplied mesh.
#[derive(Debug, Clone)]
pub struct Field {
    location: Location,
    n_components: usize,
    support: Option<Arc<MeshedRegion>>,
    data: IndexMap<EntityId, Vec<f64>>,
}

impl Field {
    /// Create an empty elemental-nodal field.
    pub fn elemental_nodal(n_components: usize) -> Self {
        Self::new(Location::ElementalNodal, n_components)
    }

    /// Create an empty nodal field.
    pub fn nodal(n_components: usize) -> Self {
        Self::new(Location::Nodal, n_components)
    }

    fn new(location: Location, n_components: usize) -> Self {
        Self {
            location,
            n_components: n_components.max(1),
            support: None,
            data: IndexMap::new(),
        }
    }

    /// Attach a mesh support.
    pub fn with_support(mut self, mesh: Arc<MeshedRegion>) -> Self {
        self.support = Some(mesh);
        self
    }

    /// Set the value vector for an entity, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value length is not a non-zero
    /// multiple of the component count (exactly one vector for nodal and
    /// elemental fields).
    pub fn set_entity_data(&mut self, id: EntityId, values: Vec<f64>) -> Result<()> {
        let valid = match self.location {
            Location::ElementalNodal => {
                !values.is_empty() && values.len() % self.n_components == 0
            }
            Location::Nodal | Location::Elemental => values.len() == self.n_components,
        };
        if !valid {
            return Err(Error::InvalidInput(format!(
                "entity {id}: {} values do not fit a {} field with {} components",
                values.len(),
                self.location.as_str(),
                self.n_components
            )));
        }
        self.data.insert(id, values);
        Ok(())
    }

    /// Field location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Number of components per value vector.
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Mesh support, if the field carries one.
    pub fn support(&self) -> Option<&Arc<MeshedRegion>> {
        self.support.as_ref()
    }

    /// Value vector for an entity, if present.
    pub fn entity_data(&self, id: EntityId) -> Option<&[f64]> {
        self.data.get(&id).map(Vec::as_slice)
    }

    /// Entity ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.data.keys().copied()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &[f64])> {
        self.data.iter().map(|(&id, values)| (id, values.as_slice()))
    }

    /// Number of entities with data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
