//! Label spaces and labeled collections.
//!
//! A collection entry is keyed by a label space, e.g. `{time: 2}` or
//! `{time: 2, elshape: 1}`. Label combinations are unique within a
//! collection; entry order is insertion order and is preserved by every
//! operation in the crate.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::mesh::MeshedRegion;
use crate::scoping::Scoping;

/// A set of `label name -> value` pairs keying one collection entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(BTreeMap<String, i64>);

impl Labels {
    /// An empty label space.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a label space from name/value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        )
    }

    /// Set a label value, replacing any previous one.
    pub fn set(&mut self, name: &str, value: i64) {
        self.0.insert(name.to_owned(), value);
    }

    /// Return a copy with one extra label set.
    pub fn with(&self, name: &str, value: i64) -> Self {
        let mut out = self.clone();
        out.set(name, value);
        out
    }

    /// Value of a label, if present.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    /// Label names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Restriction of this label space to the given names.
    ///
    /// Names absent from this space are silently dropped.
    pub fn projected<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            names
                .into_iter()
                .filter_map(|name| self.0.get(name).map(|&v| (name.to_owned(), v)))
                .collect(),
        )
    }

    /// Whether the label space has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// An ordered collection of entries keyed by unique label spaces.
#[derive(Debug, Clone)]
pub struct LabeledCollection<T> {
    label_names: IndexSet<String>,
    entries: Vec<(Labels, T)>,
}

/// Labeled collection of fields, e.g. one per time step.
pub type FieldsContainer = LabeledCollection<Field>;

/// Labeled collection of scopings aligned with a fields container.
pub type ScopingsContainer = LabeledCollection<Scoping>;

/// Labeled collection of mesh regions.
pub type MeshesContainer = LabeledCollection<Arc<MeshedRegion>>;

impl<T> LabeledCollection<T> {
    /// Create an empty collection with the given declared label names.
    pub fn new<'a>(label_names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            label_names: label_names.into_iter().map(str::to_owned).collect(),
            entries: Vec::new(),
        }
    }

    /// Declared label names, in declaration order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.label_names.iter().map(String::as_str)
    }

    /// Whether the given label name is declared.
    pub fn has_label(&self, name: &str) -> bool {
        self.label_names.contains(name)
    }

    /// Declare an additional label name.
    pub fn add_label_name(&mut self, name: &str) {
        self.label_names.insert(name.to_owned());
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// Returns `LabelMismatch` if the label combination is already present.
    pub fn add(&mut self, labels: Labels, item: T) -> Result<()> {
        if self.entries.iter().any(|(existing, _)| *existing == labels) {
            return Err(Error::LabelMismatch(format!(
                "duplicate label combination {labels}"
            )));
        }
        for name in labels.names() {
            self.label_names.insert(name.to_owned());
        }
        self.entries.push((labels, item));
        Ok(())
    }

    /// Entry matching the exact label space, if any.
    pub fn get(&self, labels: &Labels) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == labels)
            .map(|(_, item)| item)
    }

    /// Entry whose label space equals `labels` projected onto this
    /// collection's declared names.
    ///
    /// This is how scoping and mesh containers are matched against a field:
    /// the field's labels are restricted to the names this collection knows
    /// about, then looked up exactly.
    pub fn get_matching(&self, labels: &Labels) -> Option<&T> {
        let target = labels.projected(self.label_names());
        self.get(&target)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Labels, &T)> {
        self.entries.iter().map(|(labels, item)| (labels, item))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
