//! Main CsvSchema struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::{BatchReport, RowCoercer};
use crate::error::{Result, SchemaError};
use crate::input::encoding::{self, DEFAULT_ENCODING};
use crate::input::{ReaderConfig, RowReader};
use crate::registry::{self, TypeRegistry};
use crate::schema::Schema;
use crate::value::{Record, Value};

fn default_delimiter() -> char {
    ','
}

fn default_enclosure() -> char {
    '"'
}

fn default_escape() -> Option<char> {
    Some('\\')
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

/// Configuration for a CsvSchema parser.
///
/// Deserializes from JSON such as
/// `{"schema": {"name": "string", "tags": "array:|"}, "delimiter": ";"}`;
/// field order in `schema` is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvSchemaConfig {
    /// Field name to type expression, in column order.
    pub schema: Schema,
    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Quote character.
    #[serde(default = "default_enclosure")]
    pub enclosure: char,
    /// Escape character inside quoted fields; `null` disables it.
    #[serde(default = "default_escape")]
    pub escape: Option<char>,
    /// Input encoding label, e.g. `"UTF-8"`, `"windows-1252"`, `"UTF-16LE"`.
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Skip the first row of the input.
    #[serde(default, alias = "skipTitle")]
    pub skip_title: bool,
}

impl CsvSchemaConfig {
    /// Config with the given schema and default reader options.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            delimiter: default_delimiter(),
            enclosure: default_enclosure(),
            escape: default_escape(),
            encoding: default_encoding(),
            skip_title: false,
        }
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Validate the schema and build the reader configuration.
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        self.schema.validate()?;

        let delimiter = ascii_byte("delimiter", self.delimiter)?;
        let enclosure = ascii_byte("enclosure", self.enclosure)?;
        if delimiter == enclosure {
            return Err(SchemaError::Config(
                "delimiter and enclosure must differ".to_string(),
            ));
        }

        Ok(ReaderConfig {
            encoding: encoding::resolve_label(&self.encoding)?,
            delimiter,
            enclosure,
            escape: self.escape.map(|c| ascii_byte("escape", c)).transpose()?,
            skip_title: self.skip_title,
        })
    }
}

fn ascii_byte(option: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(SchemaError::Config(format!(
            "{} must be a single ASCII character, got '{}'",
            option, c
        )))
    }
}

/// Schema-driven CSV parser: reads delimited text and coerces every row
/// into a typed [`Record`].
#[derive(Debug, Clone)]
pub struct CsvSchema {
    coercer: RowCoercer,
    reader: RowReader,
}

impl CsvSchema {
    /// Create a parser backed by the global type registry.
    pub fn new(config: CsvSchemaConfig) -> Result<Self> {
        Self::with_registry(config, TypeRegistry::global())
    }

    /// Create a parser backed by a specific type registry.
    pub fn with_registry(config: CsvSchemaConfig, registry: Arc<TypeRegistry>) -> Result<Self> {
        let reader = RowReader::with_config(config.reader_config()?);
        let coercer = RowCoercer::with_registry(config.schema, registry);

        Ok(Self { coercer, reader })
    }

    /// Register a custom type on the global registry.
    ///
    /// Visible to every parser backed by the global registry, including
    /// ones already constructed.
    pub fn register_type<F>(name: impl Into<String>, converter: F) -> Result<()>
    where
        F: Fn(&str, Option<&str>) -> Result<Value> + Send + Sync + 'static,
    {
        registry::register_type(name, converter)
    }

    pub fn schema(&self) -> &Schema {
        self.coercer.schema()
    }

    pub fn coercer(&self) -> &RowCoercer {
        &self.coercer
    }

    pub fn reader_config(&self) -> &ReaderConfig {
        self.reader.config()
    }

    /// Parse delimited text into records.
    pub fn parse_str(&self, input: &str) -> Result<Vec<Record>> {
        let rows = self.reader.read_str(input)?;
        self.coercer.coerce_batch(&rows)
    }

    /// Parse raw bytes (decoded with the configured encoding).
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Vec<Record>> {
        let rows = self.reader.read_bytes(input)?;
        self.coercer.coerce_batch(&rows)
    }

    /// Parse a file into records.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let rows = self.reader.read_path(path)?;
        debug!(path = %path.display(), rows = rows.len(), "read input file");
        self.coercer.coerce_batch(&rows)
    }

    /// Parse text, keeping going past rows that fail to coerce.
    ///
    /// Reading errors (malformed CSV, bad encoding) still fail the call.
    pub fn parse_str_lenient(&self, input: &str) -> Result<BatchReport> {
        let rows = self.reader.read_str(input)?;
        Ok(self.coercer.coerce_batch_lenient(&rows))
    }

    /// Parse a file, keeping going past rows that fail to coerce.
    pub fn parse_file_lenient(&self, path: impl AsRef<Path>) -> Result<BatchReport> {
        let rows = self.reader.read_path(path)?;
        Ok(self.coercer.coerce_batch_lenient(&rows))
    }

    /// Coerce a single already-split row.
    pub fn parse_row<S: AsRef<str>>(&self, columns: &[S]) -> Result<Record> {
        self.coercer.coerce_row(columns)
    }
}
