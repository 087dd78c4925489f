//! Field catalog definitions
//!
//! The catalog is the externally supplied list of fields a condition may
//! refer to. It is read-only from the engine's point of view: the editing
//! layer owns it, the registry and evaluator only resolve types through it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic type of a catalog field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    Text,
    /// Numeric value (int or float)
    Number,
    /// Boolean value
    Boolean,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
    /// Single selection from a fixed set
    Choice,
    /// Multi-valued field
    List,
    /// File attachment
    File,
}

/// A field available to condition editors, resolved by exact name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRef {
    /// Unique field name (case-sensitive lookup key)
    pub name: String,
    /// Human-readable display name
    pub display_name: String,
    /// Semantic type, used for operator filtering
    pub field_type: FieldType,
}

impl FieldRef {
    /// Create a new field reference
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            field_type,
        }
    }
}

/// Ordered, read-only collection of fields
///
/// Insertion order is preserved for iteration (editors present fields in the
/// order the owning entity defines them); lookup is by exact name. Inserting
/// a duplicate name replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    fields: Vec<FieldRef>,
    index: HashMap<String, usize>,
}

impl FieldCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of fields
    pub fn from_fields(fields: Vec<FieldRef>) -> Self {
        let mut catalog = Self::new();
        for field in fields {
            catalog.insert(field);
        }
        catalog
    }

    /// Add a field, replacing any existing field with the same name
    pub fn insert(&mut self, field: FieldRef) {
        match self.index.get(&field.name) {
            Some(&pos) => {
                log::debug!("replacing catalog field '{}'", field.name);
                self.fields[pos] = field;
            }
            None => {
                self.index.insert(field.name.clone(), self.fields.len());
                self.fields.push(field);
            }
        }
    }

    /// Look up a field by exact name
    pub fn lookup(&self, name: &str) -> Option<&FieldRef> {
        self.index.get(name).map(|&pos| &self.fields[pos])
    }

    /// Resolve a field's type by name
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.lookup(name).map(|f| f.field_type)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRef> {
        self.fields.iter()
    }

    /// Number of fields in the catalog
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
