//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod types;

use std::sync::Arc;

use csvschema::{CsvSchema, CsvSchemaConfig, EmptyNumeric, TypeRegistry};
use tracing::debug;

use crate::cli::InputArgs;

/// Build a parser from the config file, applying command-line overrides.
pub(crate) fn load_parser(input: &InputArgs) -> Result<CsvSchema, Box<dyn std::error::Error>> {
    if !input.file.exists() {
        return Err(format!("Data file not found: {}", input.file.display()).into());
    }

    let mut config = CsvSchemaConfig::load(&input.config)?;
    if let Some(delimiter) = input.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(encoding) = &input.encoding {
        config.encoding = encoding.clone();
    }
    if let Some(skip_title) = input.skip_title {
        config.skip_title = skip_title;
    }

    debug!(
        fields = config.schema.len(),
        delimiter = %config.delimiter.escape_default(),
        encoding = %config.encoding,
        skip_title = config.skip_title,
        "loaded config"
    );

    let parser = if input.strict_numbers {
        let registry = Arc::new(TypeRegistry::with_empty_numeric(EmptyNumeric::Reject));
        CsvSchema::with_registry(config, registry)?
    } else {
        CsvSchema::new(config)?
    };

    Ok(parser)
}
