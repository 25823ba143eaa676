//! Row coercion: raw string fields to typed records.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::{Result, SchemaError};
use crate::registry::TypeRegistry;
use crate::schema::{Schema, TypeExpr};
use crate::value::{Record, Value};

/// Coerce one raw value with a type expression.
pub fn coerce_value(registry: &TypeRegistry, expr: &TypeExpr, raw: &str) -> Result<Value> {
    let convert = registry.resolve(expr.name())?;
    convert(raw, expr.parameter())
}

/// A row that failed during lenient batch coercion.
#[derive(Debug)]
pub struct RowFailure {
    /// Zero-based index of the row in the input batch.
    pub row: usize,
    /// The first error raised for the row.
    pub error: SchemaError,
}

/// Outcome of a lenient batch: successful records and per-row failures,
/// both in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<Record>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    /// Returns true if every row coerced successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of rows attempted.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    /// Convert into the fail-fast result: the records, or the first failure.
    pub fn into_result(self) -> Result<Vec<Record>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.records),
        }
    }
}

/// Applies a schema to raw rows.
///
/// Holds no mutable state; share it across threads freely.
#[derive(Debug, Clone)]
pub struct RowCoercer {
    schema: Schema,
    registry: Arc<TypeRegistry>,
}

impl RowCoercer {
    /// Create a coercer backed by the global registry.
    pub fn new(schema: Schema) -> Self {
        Self::with_registry(schema, TypeRegistry::global())
    }

    /// Create a coercer backed by a specific registry.
    pub fn with_registry(schema: Schema, registry: Arc<TypeRegistry>) -> Self {
        Self { schema, registry }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Coerce one raw row.
    ///
    /// Schema fields and raw values are paired by position. A short row
    /// yields only the leading fields; extra raw values are ignored. The
    /// first failing field aborts the row.
    pub fn coerce_row<S: AsRef<str>>(&self, raw: &[S]) -> Result<Record> {
        let mut record = Record::with_capacity(self.schema.len().min(raw.len()));

        for ((name, expr), value) in self.schema.iter().zip(raw) {
            let typed = coerce_value(&self.registry, expr, value.as_ref())?;
            record.insert(name, typed);
        }

        Ok(record)
    }

    /// Coerce every row, stopping at the first failure.
    pub fn coerce_batch<R, S>(&self, rows: &[R]) -> Result<Vec<Record>>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            trace!(row = index, "coercing row");
            let record = self.coerce_row(row.as_ref()).inspect_err(|e| {
                debug!(row = index, error = %e, "row coercion failed");
            })?;
            records.push(record);
        }

        debug!(rows = records.len(), "coerced batch");
        Ok(records)
    }

    /// Coerce every row, collecting failures instead of stopping.
    pub fn coerce_batch_lenient<R, S>(&self, rows: &[R]) -> BatchReport
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();

        for (index, row) in rows.iter().enumerate() {
            match self.coerce_row(row.as_ref()) {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    warn!(row = index, error = %error, "skipping row");
                    report.failures.push(RowFailure { row: index, error });
                }
            }
        }

        debug!(
            ok = report.records.len(),
            failed = report.failures.len(),
            "coerced batch (lenient)"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coercer(schema: Schema) -> RowCoercer {
        RowCoercer::with_registry(schema, Arc::new(TypeRegistry::new()))
    }

    #[test]
    fn test_string_columns() {
        let c = coercer(Schema::new().field("foo", "string").field("bar", "string"));
        let record = c.coerce_row(&["baz", "qux"]).unwrap();

        assert_eq!(record.get("foo"), Some(&Value::from("baz")));
        assert_eq!(record.get("bar"), Some(&Value::from("qux")));
    }

    #[test]
    fn test_int_columns() {
        let c = coercer(Schema::new().field("foo", "int").field("bar", "int"));
        let record = c.coerce_row(&["15", "25"]).unwrap();

        assert_eq!(record.get("foo"), Some(&Value::Int(15)));
        assert_eq!(record.get("bar"), Some(&Value::Int(25)));
    }

    #[test]
    fn test_float_columns() {
        let c = coercer(Schema::new().field("foo", "float").field("bar", "float"));
        let record = c.coerce_row(&["12", "18.5"]).unwrap();

        assert_eq!(record.get("foo"), Some(&Value::Float(12.0)));
        assert_eq!(record.get("bar"), Some(&Value::Float(18.5)));
    }

    #[test]
    fn test_keys_follow_schema_order() {
        let c = coercer(
            Schema::new()
                .field("z", "string")
                .field("a", "int")
                .field("m", "float"),
        );
        let record = c.coerce_row(&["x", "1", "2"]).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_short_row_truncates() {
        let c = coercer(Schema::new().field("a", "int").field("b", "int").field("c", "int"));
        let record = c.coerce_row(&["1"]).unwrap();

        assert_eq!(record.len(), 1);
        assert!(record.get("b").is_none());
    }

    #[test]
    fn test_long_row_ignores_extras() {
        let c = coercer(Schema::new().field("a", "string"));
        let record = c.coerce_row(&["1", "not-an-int", "x"]).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_unsupported_type_aborts_row() {
        let c = coercer(Schema::new().field("a", "string").field("b", "foo"));
        match c.coerce_row(&["ok", "foo"]) {
            Err(SchemaError::UnsupportedType { name }) => assert_eq!(name, "foo"),
            other => panic!("expected unsupported type, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_beyond_row_is_not_resolved() {
        let c = coercer(Schema::new().field("a", "string").field("b", "foo"));
        assert!(c.coerce_row(&["only one"]).is_ok());
    }

    #[test]
    fn test_cast_failure() {
        let c = coercer(Schema::new().field("a", "int"));
        assert!(matches!(c.coerce_row(&["a"]), Err(SchemaError::Cast { .. })));

        let c = coercer(Schema::new().field("a", "float"));
        assert!(matches!(c.coerce_row(&["a"]), Err(SchemaError::Cast { .. })));
    }

    #[test]
    fn test_missing_parameter() {
        let c = coercer(Schema::new().field("a", "array"));
        assert!(matches!(
            c.coerce_row(&["a,b"]),
            Err(SchemaError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_custom_type_with_parameter() {
        let registry = Arc::new(TypeRegistry::new());
        registry
            .register("multiply", |value: &str, factor: Option<&str>| {
                let value: i64 = value.parse().unwrap_or(0);
                let factor: i64 = factor.and_then(|f| f.parse().ok()).unwrap_or(0);
                Ok(Value::Int(value * factor))
            })
            .unwrap();

        let c = RowCoercer::with_registry(
            Schema::new().field("a", "multiply:2").field("b", "multiply:4"),
            registry,
        );
        let record = c.coerce_row(&["2", "2"]).unwrap();

        assert_eq!(record.get("a"), Some(&Value::Int(4)));
        assert_eq!(record.get("b"), Some(&Value::Int(8)));
    }

    #[test]
    fn test_batch_preserves_order() {
        let c = coercer(Schema::new().field("n", "int"));
        let rows = vec![vec!["3"], vec!["1"], vec!["2"]];
        let records = c.coerce_batch(&rows).unwrap();

        let values: Vec<i64> = records
            .iter()
            .map(|r| r.get("n").and_then(Value::as_int).unwrap())
            .collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_batch_fails_fast() {
        let c = coercer(Schema::new().field("n", "int"));
        let rows = vec![vec!["1"], vec!["x"], vec!["y"]];
        match c.coerce_batch(&rows) {
            Err(SchemaError::Cast { value, .. }) => assert_eq!(value, "x"),
            other => panic!("expected cast error, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_batch_collects_failures() {
        let c = coercer(Schema::new().field("n", "int"));
        let rows = vec![vec!["1"], vec!["x"], vec!["3"], vec!["y"]];
        let report = c.coerce_batch_lenient(&rows);

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.total_rows(), 4);
        assert!(!report.is_clean());
        assert_eq!(
            report.failures.iter().map(|f| f.row).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(matches!(report.into_result(), Err(SchemaError::Cast { value, .. }) if value == "x"));
    }

    #[test]
    fn test_coerce_value() {
        let registry = TypeRegistry::new();
        let value = coerce_value(&registry, &TypeExpr::parse("array:|"), "a|b").unwrap();
        assert_eq!(value, Value::from(vec!["a".to_string(), "b".to_string()]));
    }
}
