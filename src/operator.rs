//! Typed-pin operator wrapper around the averaging transform.
//!
//! Mirrors the connect-then-evaluate style of the enclosing data-flow
//! system: inputs are connected one by one, the output is computed lazily
//! on first request and cached until an input changes.

use crate::averaging::{average_to_nodal, MeshInput, ScopingInput};
use crate::collection::FieldsContainer;
use crate::error::{Error, Result};

/// Elemental-nodal to nodal averaging operator.
///
/// Input pins:
/// - `fields_container` (required): ElementalNodal fields,
/// - `mesh` (optional): used when a field has no support of its own,
/// - `should_average` (optional, default `true`): divide sums by the
///   contribution count,
/// - `scoping` (optional): restrict the averaged node set.
///
/// Output pin: a Nodal `fields_container`, memoized across calls to
/// [`evaluate`](Self::evaluate).
#[derive(Debug, Default)]
pub struct ElementalNodalToNodal {
    fields: Option<FieldsContainer>,
    mesh: Option<MeshInput>,
    should_average: Option<bool>,
    scoping: Option<ScopingInput>,
    output: Option<FieldsContainer>,
}

impl ElementalNodalToNodal {
    /// Create an operator with no pins connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect the required fields container pin.
    pub fn connect_fields_container(&mut self, fields: FieldsContainer) -> &mut Self {
        self.fields = Some(fields);
        self.output = None;
        self
    }

    /// Connect the optional mesh pin.
    pub fn connect_mesh(&mut self, mesh: impl Into<MeshInput>) -> &mut Self {
        self.mesh = Some(mesh.into());
        self.output = None;
        self
    }

    /// Connect the optional averaging switch (default `true`).
    pub fn connect_should_average(&mut self, should_average: bool) -> &mut Self {
        self.should_average = Some(should_average);
        self.output = None;
        self
    }

    /// Connect the optional scoping pin.
    pub fn connect_scoping(&mut self, scoping: impl Into<ScopingInput>) -> &mut Self {
        self.scoping = Some(scoping.into());
        self.output = None;
        self
    }

    /// Evaluate the operator, returning the Nodal fields container.
    ///
    /// The result is computed once and cached; reconnecting any pin
    /// invalidates the cache.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the fields container pin is not connected,
    /// plus everything [`average_to_nodal`] can report.
    pub fn evaluate(&mut self) -> Result<&FieldsContainer> {
        if self.output.is_none() {
            let fields = self.fields.as_ref().ok_or_else(|| {
                Error::InvalidInput("fields_container pin is not connected".into())
            })?;
            let result = average_to_nodal(
                fields,
                self.mesh.as_ref(),
                self.should_average.unwrap_or(true),
                self.scoping.as_ref(),
            )?;
            self.output = Some(result);
        }
        // just stored above if it was empty
        Ok(self.output.as_ref().expect("memoized output"))
    }
}
