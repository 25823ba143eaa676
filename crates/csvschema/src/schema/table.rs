//! Ordered column schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::TypeExpr;
use crate::error::{Result, SchemaError};

/// Ordered mapping of field name to type expression.
///
/// Field order decides both the output key order and which raw column a
/// field reads from: the i-th field consumes the i-th raw value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, TypeExpr>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (builder style). Re-adding a name replaces its type
    /// but keeps its original position.
    pub fn field(mut self, name: impl Into<String>, expr: impl Into<TypeExpr>) -> Self {
        self.fields.insert(name.into(), expr.into());
        self
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Type expression for a field.
    pub fn get(&self, name: &str) -> Option<&TypeExpr> {
        self.fields.get(name)
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// (name, expression) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeExpr)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check structural validity: at least one field, no empty field
    /// names and no empty type names.
    ///
    /// Whether each type is registered is not checked here; that depends
    /// on the registry in use and is reported at coercion time.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(SchemaError::Config("schema has no fields".to_string()));
        }

        for (name, expr) in &self.fields {
            if name.is_empty() {
                return Err(SchemaError::Config("schema has an empty field name".to_string()));
            }
            if expr.name().is_empty() {
                return Err(SchemaError::Config(format!(
                    "field '{}' has an empty type name ('{}')",
                    name, expr
                )));
            }
        }

        Ok(())
    }
}

impl<K, E> FromIterator<(K, E)> for Schema
where
    K: Into<String>,
    E: Into<TypeExpr>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, e)| (k.into(), e.into())).collect(),
        }
    }
}
