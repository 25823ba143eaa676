//! Delimited text reader producing raw string rows.

use std::path::Path;

use crate::error::{Result, SchemaError};
use super::encoding;
use encoding_rs::Encoding;

/// A raw row: string fields in file order.
pub type RawRow = Vec<String>;

/// Reader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote (enclosure) character.
    pub enclosure: u8,
    /// Escape character inside quoted fields (None = doubled quotes only).
    pub escape: Option<u8>,
    /// Encoding of byte input.
    pub encoding: &'static Encoding,
    /// Drop the first row (a title/header line).
    pub skip_title: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            enclosure: b'"',
            escape: Some(b'\\'),
            encoding: encoding::default_encoding(),
            skip_title: false,
        }
    }
}

/// Reads delimited text into raw rows.
#[derive(Debug, Clone, Default)]
pub struct RowReader {
    config: ReaderConfig,
}

impl RowReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a file, decoding it with the configured encoding.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|e| SchemaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.read_bytes(&contents)
    }

    /// Read raw bytes, decoding them with the configured encoding.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRow>> {
        let text = encoding::decode(bytes, self.config.encoding)?;
        self.read_str(&text)
    }

    /// Read text that is already decoded.
    ///
    /// Rows may differ in width; blank lines are skipped.
    pub fn read_str(&self, text: &str) -> Result<Vec<RawRow>> {
        self.read_from(text.as_bytes())
    }

    fn read_from<R: std::io::Read>(&self, source: R) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.enclosure)
            .escape(self.config.escape)
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        let mut records = reader.records();
        if self.config.skip_title {
            records.next().transpose()?;
        }

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(rows)
    }
}
