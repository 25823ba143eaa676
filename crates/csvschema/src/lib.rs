//! csvschema: schema-driven CSV parsing into typed records.
//!
//! A schema maps column names to type expressions. Each raw row is read
//! with the `csv` crate, then every field is converted by the converter
//! registered for its type.
//!
//! # Type expressions
//!
//! - `string`, `int`, `float`: built-in scalar types
//! - `array:<delim>`: split the field on `<delim>`
//! - any name registered with [`CsvSchema::register_type`] or
//!   [`TypeRegistry::register`], optionally with a `:<param>` suffix that
//!   is passed to the converter verbatim
//!
//! # Example
//!
//! ```
//! use csvschema::{CsvSchema, CsvSchemaConfig, Schema, Value};
//!
//! let schema = Schema::new()
//!     .field("author", "string")
//!     .field("age", "int")
//!     .field("children", "array:|");
//!
//! let parser = CsvSchema::new(CsvSchemaConfig::new(schema)).unwrap();
//! let records = parser.parse_str("Sir Fooington,58,John|Jane\n").unwrap();
//!
//! assert_eq!(records[0].get("age"), Some(&Value::Int(58)));
//! ```

pub mod coerce;
pub mod convert;
pub mod error;
pub mod input;
pub mod registry;
pub mod schema;
pub mod value;

mod csvschema;

pub use crate::csvschema::{CsvSchema, CsvSchemaConfig};
pub use coerce::{BatchReport, RowCoercer, RowFailure, coerce_value};
pub use convert::EmptyNumeric;
pub use error::{Result, SchemaError};
pub use input::{Encoding, RawRow, ReaderConfig, RowReader};
pub use registry::{Converter, TypeRegistry, register_type};
pub use schema::{Schema, TypeExpr};
pub use value::{Record, Value};
