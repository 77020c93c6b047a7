//! Elemental-nodal to nodal averaging.
//!
//! Transforms ElementalNodal fields into Nodal fields: each node's value is
//! accumulated from every in-scope element touching it, then divided by the
//! contribution count (or left as a raw sum for discrete quantities). Mixed
//! shell/solid fields are split by element shape and the output container
//! carries an `elshape` label per split field.
//!
//! The per-field work is independent, so the container entries are processed
//! in parallel; output entry order always follows input entry order.

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::collection::{FieldsContainer, Labels, MeshesContainer, ScopingsContainer};
use crate::error::{Error, Result};
use crate::field::{Field, Location};
use crate::mesh::{ElementDef, ElementShape, MeshedRegion};
use crate::scoping::Scoping;
use crate::types::EntityId;

/// Mesh pin value: a single region or a labeled container of regions.
#[derive(Debug, Clone)]
pub enum MeshInput {
    /// One region used for every field.
    Region(Arc<MeshedRegion>),
    /// Per-label regions, matched against each field's labels.
    Container(MeshesContainer),
}

impl MeshInput {
    /// Region applicable to a field with the given labels.
    fn resolve_for(&self, labels: &Labels) -> Option<&Arc<MeshedRegion>> {
        match self {
            MeshInput::Region(mesh) => Some(mesh),
            MeshInput::Container(container) => container.get_matching(labels),
        }
    }
}

impl From<MeshedRegion> for MeshInput {
    fn from(mesh: MeshedRegion) -> Self {
        MeshInput::Region(Arc::new(mesh))
    }
}

impl From<Arc<MeshedRegion>> for MeshInput {
    fn from(mesh: Arc<MeshedRegion>) -> Self {
        MeshInput::Region(mesh)
    }
}

/// Scoping pin value: one scoping for all fields, or one per label space.
#[derive(Debug, Clone)]
pub enum ScopingInput {
    /// Uniform restriction applied to every field.
    Scoping(Scoping),
    /// Per-label scopings; label names must be a subset of the fields
    /// container's label names.
    Container(ScopingsContainer),
}

impl From<Scoping> for ScopingInput {
    fn from(scoping: Scoping) -> Self {
        ScopingInput::Scoping(scoping)
    }
}

/// Average ElementalNodal fields into Nodal fields.
///
/// Per input field: elements are classified by shape; a mixed shell/solid
/// field is split into one output field per shape (solids first), labeled
/// with `elshape`; nodal values are accumulated per node over the elements
/// in scope and divided by the contribution count when `should_average` is
/// true. Nodes without contributions are omitted from the output. Output
/// values follow scoping order when a scoping is given, ascending node id
/// otherwise.
///
/// Geometry comes from each field's own support when present, otherwise
/// from `mesh`.
///
/// # Errors
///
/// * [`Error::InvalidInput`] — empty container, a field not located
///   ElementalNodal, an element id unknown to the mesh, or element data not
///   matching the connectivity.
/// * [`Error::MissingSupport`] — no mesh available for a field.
/// * [`Error::LabelMismatch`] — scoping container labels not aligned with
///   the fields container.
/// * [`Error::UnknownElementShape`] — a field references a beam element.
pub fn average_to_nodal(
    fields: &FieldsContainer,
    mesh: Option<&MeshInput>,
    should_average: bool,
    scoping: Option<&ScopingInput>,
) -> Result<FieldsContainer> {
    if fields.is_empty() {
        return Err(Error::InvalidInput(
            "fields container has no entries".into(),
        ));
    }
    for (labels, field) in fields.iter() {
        if field.location() != Location::ElementalNodal {
            return Err(Error::InvalidInput(format!(
                "field {labels} has location {}, expected ElementalNodal",
                field.location().as_str()
            )));
        }
    }
    if let Some(ScopingInput::Container(container)) = scoping {
        for name in container.label_names() {
            if !fields.has_label(name) {
                return Err(Error::LabelMismatch(format!(
                    "scoping container label '{name}' is not a label of the fields container"
                )));
            }
        }
    }

    debug!(
        n_fields = fields.len(),
        should_average, "averaging elemental-nodal container to nodal"
    );

    let entries: Vec<(&Labels, &Field)> = fields.iter().collect();
    let per_field: Vec<Vec<(Labels, Field)>> = entries
        .par_iter()
        .map(|&(labels, field)| {
            let scope = resolve_scope(labels, scoping)?;
            average_field(labels, field, mesh, should_average, scope)
        })
        .collect::<Result<_>>()?;

    let mut out = FieldsContainer::new(fields.label_names());
    for (labels, field) in per_field.into_iter().flatten() {
        out.add(labels, field)?;
    }
    Ok(out)
}

/// Scoping applicable to a field with the given labels, if any.
fn resolve_scope<'a>(
    labels: &Labels,
    scoping: Option<&'a ScopingInput>,
) -> Result<Option<&'a Scoping>> {
    match scoping {
        None => Ok(None),
        Some(ScopingInput::Scoping(scoping)) => Ok(Some(scoping)),
        Some(ScopingInput::Container(container)) => {
            container.get_matching(labels).map(Some).ok_or_else(|| {
                Error::LabelMismatch(format!(
                    "no scoping entry matches field labels {labels}"
                ))
            })
        }
    }
}

/// Average a single field, possibly splitting it by element shape.
fn average_field(
    labels: &Labels,
    field: &Field,
    mesh: Option<&MeshInput>,
    should_average: bool,
    scope: Option<&Scoping>,
) -> Result<Vec<(Labels, Field)>> {
    let mesh = field
        .support()
        .or_else(|| mesh.and_then(|m| m.resolve_for(labels)))
        .ok_or_else(|| {
            Error::MissingSupport(format!(
                "field {labels} has no support and no mesh was supplied"
            ))
        })?;

    // Classify the field's elements by shape, keeping field entry order.
    let mut solids: Vec<(&ElementDef, &[f64])> = Vec::new();
    let mut shells: Vec<(&ElementDef, &[f64])> = Vec::new();
    for (elem_id, values) in field.iter() {
        let def = mesh.element(elem_id).ok_or_else(|| {
            Error::InvalidInput(format!(
                "field {labels} references element {elem_id} absent from the mesh"
            ))
        })?;
        let expected = def.nodes.len() * field.n_components();
        if values.len() != expected {
            return Err(Error::InvalidInput(format!(
                "element {elem_id}: {} values, expected {expected} ({} nodes x {} components)",
                values.len(),
                def.nodes.len(),
                field.n_components()
            )));
        }
        match def.shape {
            ElementShape::Solid => solids.push((def, values)),
            ElementShape::Shell => shells.push((def, values)),
            ElementShape::Beam => {
                return Err(Error::UnknownElementShape(format!(
                    "element {elem_id} is a beam; only solid and shell elements can be averaged"
                )))
            }
        }
    }

    trace!(
        %labels,
        solids = solids.len(),
        shells = shells.len(),
        "classified field elements"
    );

    let mixed = !solids.is_empty() && !shells.is_empty();
    let partitions: Vec<(Option<ElementShape>, Vec<(&ElementDef, &[f64])>)> = if mixed {
        vec![
            (Some(ElementShape::Solid), solids),
            (Some(ElementShape::Shell), shells),
        ]
    } else if shells.is_empty() {
        // uniform solid field, or an empty field
        vec![(None, solids)]
    } else {
        vec![(None, shells)]
    };

    let mut outputs = Vec::with_capacity(partitions.len());
    for (shape, partition) in partitions {
        let nodal = accumulate_partition(
            &partition,
            field.n_components(),
            mesh,
            should_average,
            scope,
        )?;
        let out_labels = match shape {
            Some(shape) => labels.with("elshape", shape.label_value()),
            None => labels.clone(),
        };
        outputs.push((out_labels, nodal));
    }
    Ok(outputs)
}

/// Accumulate one shape partition into a nodal field.
fn accumulate_partition(
    elements: &[(&ElementDef, &[f64])],
    n_components: usize,
    mesh: &Arc<MeshedRegion>,
    should_average: bool,
    scope: Option<&Scoping>,
) -> Result<Field> {
    let mut acc: IndexMap<EntityId, (Vec<f64>, u32)> = IndexMap::new();
    for (def, values) in elements {
        for (&node_id, chunk) in def.nodes.iter().zip(values.chunks_exact(n_components)) {
            if let Some(scope) = scope {
                if !scope.contains(node_id) {
                    continue;
                }
            }
            let (sum, count) = acc
                .entry(node_id)
                .or_insert_with(|| (vec![0.0; n_components], 0));
            for (s, v) in sum.iter_mut().zip(chunk) {
                *s += v;
            }
            *count += 1;
        }
    }

    let mut nodal = Field::nodal(n_components).with_support(Arc::clone(mesh));
    match scope {
        Some(scope) => {
            for id in scope.ids() {
                if let Some((sum, count)) = acc.swap_remove(&id) {
                    nodal.set_entity_data(id, finish(sum, count, should_average))?;
                }
            }
        }
        None => {
            let mut ids: Vec<EntityId> = acc.keys().copied().collect();
            ids.sort_unstable();
            for id in ids {
                if let Some((sum, count)) = acc.swap_remove(&id) {
                    nodal.set_entity_data(id, finish(sum, count, should_average))?;
                }
            }
        }
    }
    Ok(nodal)
}

/// Turn an accumulated sum into the emitted value vector.
fn finish(sum: Vec<f64>, count: u32, should_average: bool) -> Vec<f64> {
    if should_average {
        let c = f64::from(count);
        sum.into_iter().map(|s| s / c).collect()
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    /// Two shell quads sharing nodes 2 and 3.
    ///
    /// Element 1: nodes 1-2-3-4, element 2: nodes 2-5-6-3.
    fn two_quads() -> Arc<MeshedRegion> {
        let mut mesh = MeshedRegion::new();
        mesh.add_node(1, Vector3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_node(2, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.add_node(3, Vector3::new(1.0, 1.0, 0.0)).unwrap();
        mesh.add_node(4, Vector3::new(0.0, 1.0, 0.0)).unwrap();
        mesh.add_node(5, Vector3::new(2.0, 0.0, 0.0)).unwrap();
        mesh.add_node(6, Vector3::new(2.0, 1.0, 0.0)).unwrap();
        mesh.add_element(1, ElementShape::Shell, vec![1, 2, 3, 4])
            .unwrap();
        mesh.add_element(2, ElementShape::Shell, vec![2, 5, 6, 3])
            .unwrap();
        Arc::new(mesh)
    }

    /// A solid tet (nodes 1-4) and a shell tri (nodes 4-6) sharing node 4.
    fn tet_and_tri() -> Arc<MeshedRegion> {
        let mut mesh = MeshedRegion::new();
        for (id, p) in [
            (1, Vector3::new(0.0, 0.0, 0.0)),
            (2, Vector3::new(1.0, 0.0, 0.0)),
            (3, Vector3::new(0.0, 1.0, 0.0)),
            (4, Vector3::new(0.0, 0.0, 1.0)),
            (5, Vector3::new(1.0, 0.0, 1.0)),
            (6, Vector3::new(0.0, 1.0, 1.0)),
        ] {
            mesh.add_node(id, p).unwrap();
        }
        mesh.add_element(1, ElementShape::Solid, vec![1, 2, 3, 4])
            .unwrap();
        mesh.add_element(2, ElementShape::Shell, vec![4, 5, 6])
            .unwrap();
        Arc::new(mesh)
    }

    fn scalar_field(mesh: &Arc<MeshedRegion>, entries: &[(EntityId, &[f64])]) -> Field {
        let mut field = Field::elemental_nodal(1).with_support(Arc::clone(mesh));
        for (id, values) in entries {
            field.set_entity_data(*id, values.to_vec()).unwrap();
        }
        field
    }

    fn single_field_container(field: Field) -> FieldsContainer {
        let mut fields = FieldsContainer::new(["time"]);
        fields
            .add(Labels::from_pairs([("time", 1)]), field)
            .unwrap();
        fields
    }

    #[test]
    fn test_shared_node_averaged() {
        let mesh = two_quads();
        // value 10 everywhere on element 1, 20 everywhere on element 2
        let field = scalar_field(
            &mesh,
            &[(1, &[10.0, 10.0, 10.0, 10.0]), (2, &[20.0, 20.0, 20.0, 20.0])],
        );
        let fields = single_field_container(field);

        let out = average_to_nodal(&fields, None, true, None).unwrap();
        assert_eq!(out.len(), 1);
        let (labels, nodal) = out.iter().next().unwrap();
        assert_eq!(labels.get("time"), Some(1));
        assert_eq!(labels.get("elshape"), None);
        assert_eq!(nodal.location(), Location::Nodal);
        assert_eq!(nodal.len(), 6);

        // nodes 2 and 3 are shared: (10 + 20) / 2
        assert_relative_eq!(nodal.entity_data(2).unwrap()[0], 15.0);
        assert_relative_eq!(nodal.entity_data(3).unwrap()[0], 15.0);
        // node 1 only touched by element 1
        assert_relative_eq!(nodal.entity_data(1).unwrap()[0], 10.0);
        assert_relative_eq!(nodal.entity_data(5).unwrap()[0], 20.0);
    }

    #[test]
    fn test_raw_sum_without_averaging() {
        let mesh = two_quads();
        let field = scalar_field(
            &mesh,
            &[(1, &[10.0, 10.0, 10.0, 10.0]), (2, &[20.0, 20.0, 20.0, 20.0])],
        );
        let fields = single_field_container(field);

        let out = average_to_nodal(&fields, None, false, None).unwrap();
        let (_, nodal) = out.iter().next().unwrap();
        assert_relative_eq!(nodal.entity_data(2).unwrap()[0], 30.0);
        assert_relative_eq!(nodal.entity_data(1).unwrap()[0], 10.0);
    }

    #[test]
    fn test_sum_is_average_times_count() {
        let mesh = two_quads();
        let field = scalar_field(
            &mesh,
            &[(1, &[1.0, 2.0, 3.0, 4.0]), (2, &[5.0, 6.0, 7.0, 8.0])],
        );
        let mut fields = FieldsContainer::new(["time"]);
        fields
            .add(Labels::from_pairs([("time", 1)]), field)
            .unwrap();

        let averaged = average_to_nodal(&fields, None, true, None).unwrap();
        let summed = average_to_nodal(&fields, None, false, None).unwrap();
        let (_, avg) = averaged.iter().next().unwrap();
        let (_, sum) = summed.iter().next().unwrap();

        // shared nodes 2 and 3 have two contributions, the rest one
        for id in avg.ids() {
            let count = if id == 2 || id == 3 { 2.0 } else { 1.0 };
            assert_relative_eq!(
                sum.entity_data(id).unwrap()[0],
                avg.entity_data(id).unwrap()[0] * count
            );
        }
    }

    #[test]
    fn test_mixed_shapes_split_with_elshape_label() {
        let mesh = tet_and_tri();
        let field = scalar_field(
            &mesh,
            &[(1, &[1.0, 1.0, 1.0, 1.0]), (2, &[7.0, 7.0, 7.0])],
        );
        let fields = single_field_container(field);

        let out = average_to_nodal(&fields, None, true, None).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.has_label("elshape"));

        let entries: Vec<_> = out.iter().collect();
        // solids first
        let (solid_labels, solid) = entries[0];
        let (shell_labels, shell) = entries[1];
        assert_eq!(solid_labels.get("elshape"), Some(0));
        assert_eq!(shell_labels.get("elshape"), Some(1));
        assert_eq!(solid_labels.get("time"), Some(1));

        let solid_ids: Vec<_> = solid.ids().collect();
        let shell_ids: Vec<_> = shell.ids().collect();
        assert_eq!(solid_ids, vec![1, 2, 3, 4]);
        assert_eq!(shell_ids, vec![4, 5, 6]);

        // node 4 is shared across shapes but each partition only sees its
        // own elements, so no cross-shape averaging happens
        assert_relative_eq!(solid.entity_data(4).unwrap()[0], 1.0);
        assert_relative_eq!(shell.entity_data(4).unwrap()[0], 7.0);
    }

    #[test]
    fn test_uniform_shape_keeps_labels() {
        let mesh = two_quads();
        let field = scalar_field(&mesh, &[(1, &[1.0, 1.0, 1.0, 1.0])]);
        let fields = single_field_container(field);
        let out = average_to_nodal(&fields, None, true, None).unwrap();
        assert_eq!(out.len(), 1);
        assert!(!out.has_label("elshape"));
    }

    #[test]
    fn test_scoping_restricts_and_orders_output() {
        let mesh = two_quads();
        let field = scalar_field(
            &mesh,
            &[(1, &[10.0, 10.0, 10.0, 10.0]), (2, &[20.0, 20.0, 20.0, 20.0])],
        );
        let fields = single_field_container(field);

        let scoping = ScopingInput::from(Scoping::nodal([3, 2]));
        let out = average_to_nodal(&fields, None, true, Some(&scoping)).unwrap();
        let (_, nodal) = out.iter().next().unwrap();

        // only the scoped nodes, in scoping order
        let ids: Vec<_> = nodal.ids().collect();
        assert_eq!(ids, vec![3, 2]);
        assert_relative_eq!(nodal.entity_data(2).unwrap()[0], 15.0);
    }

    #[test]
    fn test_disjoint_scoping_yields_empty_field() {
        let mesh = two_quads();
        let field = scalar_field(&mesh, &[(1, &[10.0, 10.0, 10.0, 10.0])]);
        let fields = single_field_container(field);

        let scoping = ScopingInput::from(Scoping::nodal([99, 100]));
        let out = average_to_nodal(&fields, None, true, Some(&scoping)).unwrap();
        assert_eq!(out.len(), 1);
        let (_, nodal) = out.iter().next().unwrap();
        assert!(nodal.is_empty());
    }

    #[test]
    fn test_scopings_container_matched_per_field() {
        let mesh = two_quads();
        let mut fields = FieldsContainer::new(["time"]);
        for t in [1, 2] {
            fields
                .add(
                    Labels::from_pairs([("time", t)]),
                    scalar_field(&mesh, &[(1, &[10.0, 10.0, 10.0, 10.0])]),
                )
                .unwrap();
        }

        let mut scopings = ScopingsContainer::new(["time"]);
        scopings
            .add(Labels::from_pairs([("time", 1)]), Scoping::nodal([1]))
            .unwrap();
        scopings
            .add(Labels::from_pairs([("time", 2)]), Scoping::nodal([2, 3]))
            .unwrap();

        let scoping = ScopingInput::Container(scopings);
        let out = average_to_nodal(&fields, None, true, Some(&scoping)).unwrap();
        let entries: Vec<_> = out.iter().collect();
        assert_eq!(entries[0].1.ids().collect::<Vec<_>>(), vec![1]);
        assert_eq!(entries[1].1.ids().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_scopings_container_missing_combination() {
        let mesh = two_quads();
        let fields =
            single_field_container(scalar_field(&mesh, &[(1, &[1.0, 1.0, 1.0, 1.0])]));

        let mut scopings = ScopingsContainer::new(["time"]);
        scopings
            .add(Labels::from_pairs([("time", 7)]), Scoping::nodal([1]))
            .unwrap();

        let scoping = ScopingInput::Container(scopings);
        let err = average_to_nodal(&fields, None, true, Some(&scoping)).unwrap_err();
        assert!(matches!(err, Error::LabelMismatch(_)));
    }

    #[test]
    fn test_scopings_container_foreign_label() {
        let mesh = two_quads();
        let fields =
            single_field_container(scalar_field(&mesh, &[(1, &[1.0, 1.0, 1.0, 1.0])]));

        let mut scopings = ScopingsContainer::new(["zone"]);
        scopings
            .add(Labels::from_pairs([("zone", 1)]), Scoping::nodal([1]))
            .unwrap();

        let scoping = ScopingInput::Container(scopings);
        let err = average_to_nodal(&fields, None, true, Some(&scoping)).unwrap_err();
        assert!(matches!(err, Error::LabelMismatch(_)));
    }

    #[test]
    fn test_empty_container_rejected() {
        let fields = FieldsContainer::new(["time"]);
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_wrong_location_rejected() {
        let mesh = two_quads();
        let mut nodal = Field::nodal(1).with_support(Arc::clone(&mesh));
        nodal.set_entity_data(1, vec![0.0]).unwrap();
        let fields = single_field_container(nodal);
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_support_rejected() {
        let mut field = Field::elemental_nodal(1);
        field.set_entity_data(1, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        let fields = single_field_container(field);
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::MissingSupport(_)));
    }

    #[test]
    fn test_mesh_argument_used_when_no_support() {
        let mesh = two_quads();
        let mut field = Field::elemental_nodal(1);
        field
            .set_entity_data(1, vec![10.0, 10.0, 10.0, 10.0])
            .unwrap();
        let fields = single_field_container(field);

        let mesh_input = MeshInput::from(Arc::clone(&mesh));
        let out = average_to_nodal(&fields, Some(&mesh_input), true, None).unwrap();
        let (_, nodal) = out.iter().next().unwrap();
        assert_relative_eq!(nodal.entity_data(1).unwrap()[0], 10.0);
    }

    #[test]
    fn test_meshes_container_matched_by_labels() {
        let mesh = two_quads();
        let mut meshes = MeshesContainer::new(["time"]);
        meshes
            .add(Labels::from_pairs([("time", 1)]), Arc::clone(&mesh))
            .unwrap();

        let mut field = Field::elemental_nodal(1);
        field.set_entity_data(2, vec![4.0, 4.0, 4.0, 4.0]).unwrap();
        let fields = single_field_container(field);

        let mesh_input = MeshInput::Container(meshes);
        let out = average_to_nodal(&fields, Some(&mesh_input), true, None).unwrap();
        let (_, nodal) = out.iter().next().unwrap();
        assert_eq!(nodal.len(), 4);
    }

    #[test]
    fn test_beam_element_rejected() {
        let mut mesh = MeshedRegion::new();
        mesh.add_node(1, Vector3::zeros()).unwrap();
        mesh.add_node(2, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.add_element(1, ElementShape::Beam, vec![1, 2]).unwrap();
        let mesh = Arc::new(mesh);

        let fields = single_field_container(scalar_field(&mesh, &[(1, &[1.0, 1.0])]));
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::UnknownElementShape(_)));
    }

    #[test]
    fn test_unknown_element_rejected() {
        let mesh = two_quads();
        let fields = single_field_container(scalar_field(&mesh, &[(9, &[1.0])]));
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_connectivity_length_mismatch_rejected() {
        let mesh = two_quads();
        // element 1 has 4 nodes but only 2 values are given
        let fields = single_field_container(scalar_field(&mesh, &[(1, &[1.0, 1.0])]));
        let err = average_to_nodal(&fields, None, true, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_vector_components_averaged_independently() {
        let mesh = two_quads();
        let mut field = Field::elemental_nodal(3).with_support(Arc::clone(&mesh));
        // per-node vectors: element 1 contributes (1, 2, 3) at every node,
        // element 2 contributes (3, 6, 9)
        let e1: Vec<f64> = [1.0, 2.0, 3.0].repeat(4);
        let e2: Vec<f64> = [3.0, 6.0, 9.0].repeat(4);
        field.set_entity_data(1, e1).unwrap();
        field.set_entity_data(2, e2).unwrap();
        let fields = single_field_container(field);

        let out = average_to_nodal(&fields, None, true, None).unwrap();
        let (_, nodal) = out.iter().next().unwrap();
        let shared = nodal.entity_data(2).unwrap();
        assert_relative_eq!(shared[0], 2.0);
        assert_relative_eq!(shared[1], 4.0);
        assert_relative_eq!(shared[2], 6.0);
    }
}
