//! Core aliases shared across the crate.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = Vector3<f64>;

/// External id of a mesh entity (node or element).
///
/// Ids come from the result file and are 1-based by convention; they are
/// never indices into internal storage.
pub type EntityId = i32;
