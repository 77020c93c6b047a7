//! Meshed region data structure.
//!
//! Stores nodal coordinates and element connectivity keyed by external
//! entity ids, plus the element shape tags that drive shape-split averaging.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::types::{EntityId, Point3};

/// Shape classification of an element.
///
/// Averaging operations split mixed meshes by shape; beams are carried in
/// the mesh but are not a valid averaging target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementShape {
    /// 3D continuum element (tet, hex, ...).
    Solid,
    /// 2D structural element (quad, tri, ...).
    Shell,
    /// 1D structural element.
    Beam,
}

impl ElementShape {
    /// Value used for the `elshape` container label.
    pub fn label_value(self) -> i64 {
        match self {
            ElementShape::Solid => 0,
            ElementShape::Shell => 1,
            ElementShape::Beam => 2,
        }
    }

    /// Human-readable shape name.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementShape::Solid => "solid",
            ElementShape::Shell => "shell",
            ElementShape::Beam => "beam",
        }
    }
}

/// Element connectivity: shape tag plus ordered node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDef {
    /// Shape classification.
    pub shape: ElementShape,
    /// Node ids in local node order.
    pub nodes: Vec<EntityId>,
}

/// A finite element mesh region: nodes and elements keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MeshedRegion {
    nodes: IndexMap<EntityId, Point3>,
    elements: IndexMap<EntityId, ElementDef>,
}

impl MeshedRegion {
    /// Create a new empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a region with pre-allocated capacity.
    pub fn with_capacity(n_nodes: usize, n_elements: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(n_nodes),
            elements: IndexMap::with_capacity(n_elements),
        }
    }

    /// Add a node with its coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already present.
    pub fn add_node(&mut self, id: EntityId, coords: Point3) -> Result<()> {
        if self.nodes.insert(id, coords).is_some() {
            return Err(Error::Mesh(format!("duplicate node id {id}")));
        }
        Ok(())
    }

    /// Add an element with its shape and connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicate element id, an empty node list, or a
    /// node id that does not exist in the region.
    pub fn add_element(
        &mut self,
        id: EntityId,
        shape: ElementShape,
        nodes: Vec<EntityId>,
    ) -> Result<()> {
        if self.elements.contains_key(&id) {
            return Err(Error::Mesh(format!("duplicate element id {id}")));
        }
        if nodes.is_empty() {
            return Err(Error::Mesh(format!("element {id} has no nodes")));
        }
        for &node_id in &nodes {
            if !self.nodes.contains_key(&node_id) {
                return Err(Error::Mesh(format!(
                    "element {id} references unknown node {node_id}"
                )));
            }
        }
        self.elements.insert(id, ElementDef { shape, nodes });
        Ok(())
    }

    /// Number of nodes in the region.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the region.
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// Coordinates of a node, if present.
    pub fn node(&self, id: EntityId) -> Option<&Point3> {
        self.nodes.get(&id)
    }

    /// Connectivity of an element, if present.
    pub fn element(&self, id: EntityId) -> Option<&ElementDef> {
        self.elements.get(&id)
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.nodes.keys().copied()
    }

    /// Element ids in insertion order.
    pub fn element_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.elements.keys().copied()
    }
}
