//! fepost-core - Finite Element Post-processing
//!
//! Library for post-processing finite element results:
//! - Fields and labeled containers for ElementalNodal/Nodal result data
//! - Meshed regions with shape-tagged elements
//! - Scopings restricting operations to explicit entity sets
//! - Elemental-nodal to nodal averaging with shape-split handling
//!
//! # Architecture
//!
//! The library is designed around these core abstractions:
//!
//! - [`MeshedRegion`]: nodes and shape-tagged element connectivity
//! - [`Field`]: per-entity value vectors at a fixed result location
//! - [`LabeledCollection`]: label-keyed containers ([`FieldsContainer`],
//!   [`ScopingsContainer`], [`MeshesContainer`])
//! - [`average_to_nodal`]: the averaging transform itself
//! - [`ElementalNodalToNodal`]: connect-then-evaluate operator wrapper

pub mod averaging;
pub mod collection;
pub mod error;
pub mod field;
pub mod mesh;
pub mod operator;
pub mod scoping;
pub mod types;

pub use averaging::{average_to_nodal, MeshInput, ScopingInput};
pub use collection::{
    FieldsContainer, LabeledCollection, Labels, MeshesContainer, ScopingsContainer,
};
pub use error::{Error, Result};
pub use field::{Field, Location};
pub use mesh::{ElementDef, ElementShape, MeshedRegion};
pub use operator::ElementalNodalToNodal;
pub use scoping::{Scoping, ScopingLocation};
pub use types::{EntityId, Point3};
