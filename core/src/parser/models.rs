//! # Data Models
//!
//! Descriptions of a located declaration, handed to templates as their context.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A member field of the inspected declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// The field type exactly as written (e.g. `i32`).
    #[serde(rename = "type")]
    pub declared_type: String,
    /// The field identifier.
    pub name: String,
    /// Trimmed doc comment attached to the field, empty if there is none.
    #[serde(default)]
    pub doc: String,
    /// Free-form annotations added by callers after extraction.
    ///
    /// The inspector never fills this in.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl FieldDescription {
    /// Creates a field with empty metadata.
    pub fn new(
        declared_type: impl Into<String>,
        name: impl Into<String>,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            declared_type: declared_type.into(),
            name: name.into(),
            doc: doc.into(),
            metadata: IndexMap::new(),
        }
    }

    /// Adds a metadata entry, replacing any previous value for `key`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A located declaration together with its fields in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    /// The declaration name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescription>,
}

impl TypeDescription {
    /// Creates a description with no fields yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Looks a field up by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Mutable variant of [`TypeDescription::field`], for annotating metadata.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescription> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}
