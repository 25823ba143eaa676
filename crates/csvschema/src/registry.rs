//! Type registry: maps type names to converters.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::convert::{self, EmptyNumeric};
use crate::error::{Result, SchemaError};
use crate::value::Value;

/// A converter turns a raw field value and the optional type parameter into
/// a typed value.
pub type Converter = Arc<dyn Fn(&str, Option<&str>) -> Result<Value> + Send + Sync>;

/// Names of the built-in types, in registration order.
pub const BUILTIN_TYPES: &[&str] = &["string", "int", "float", "array"];

static GLOBAL: Lazy<Arc<TypeRegistry>> = Lazy::new(|| Arc::new(TypeRegistry::new()));

/// Thread-safe table of named converters.
///
/// Built-ins are ordinary pre-registered entries, so registering one of
/// their names replaces them. There is no unregister.
pub struct TypeRegistry {
    converters: RwLock<HashMap<String, Converter>>,
}

impl TypeRegistry {
    /// Create a registry with the built-in types and the default
    /// (lenient) empty-value policy.
    pub fn new() -> Self {
        Self::with_empty_numeric(EmptyNumeric::default())
    }

    /// Create a registry whose `int`/`float` built-ins use `empty`.
    pub fn with_empty_numeric(empty: EmptyNumeric) -> Self {
        let registry = Self::empty();
        {
            let mut table = registry.write();
            table.insert(
                "string".to_string(),
                Arc::new(|value: &str, _: Option<&str>| -> Result<Value> {
                    Ok(convert::parse_string(value))
                }),
            );
            table.insert(
                "int".to_string(),
                Arc::new(move |value: &str, _: Option<&str>| convert::parse_int(value, empty)),
            );
            table.insert(
                "float".to_string(),
                Arc::new(move |value: &str, _: Option<&str>| convert::parse_float(value, empty)),
            );
            table.insert("array".to_string(), Arc::new(convert::parse_array));
        }
        registry
    }

    /// Create a registry with no types at all.
    pub fn empty() -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide shared registry, created on first use with the
    /// built-in types.
    pub fn global() -> Arc<TypeRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Register (or replace) the converter for `name`.
    pub fn register<F>(&self, name: impl Into<String>, converter: F) -> Result<()>
    where
        F: Fn(&str, Option<&str>) -> Result<Value> + Send + Sync + 'static,
    {
        self.register_converter(name, Arc::new(converter))
    }

    /// Register an already shared converter.
    pub fn register_converter(&self, name: impl Into<String>, converter: Converter) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::Config("type name must not be empty".to_string()));
        }

        let replaced = self.write().insert(name.clone(), converter).is_some();
        debug!(type_name = %name, replaced, "registered converter");
        Ok(())
    }

    /// Look up the converter for `name`.
    pub fn resolve(&self, name: &str) -> Result<Converter> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::UnsupportedType {
                name: name.to_string(),
            })
    }

    /// Returns true if `name` has a converter.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// All registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    // Writers only ever insert whole entries, so a poisoned lock still
    // guards a consistent table.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Converter>> {
        self.converters.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Converter>> {
        self.converters.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

/// Register a custom type on the global registry.
pub fn register_type<F>(name: impl Into<String>, converter: F) -> Result<()>
where
    F: Fn(&str, Option<&str>) -> Result<Value> + Send + Sync + 'static,
{
    GLOBAL.register(name, converter)
}
