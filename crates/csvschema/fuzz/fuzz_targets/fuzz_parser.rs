//! Fuzz target for end-to-end parsing.
//!
//! This fuzzer tests that reading and coercing arbitrary bytes:
//! 1. Never panics on malformed input
//! 2. Handles every built-in type on every column

#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use csvschema::{CsvSchema, CsvSchemaConfig, Schema, TypeRegistry};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let schema = Schema::new()
        .field("s", "string")
        .field("i", "int")
        .field("f", "float")
        .field("a", "array:,");

    if let Ok(parser) = CsvSchema::with_registry(CsvSchemaConfig::new(schema), Arc::new(TypeRegistry::new())) {
        let _ = parser.parse_bytes(data);
        if let Ok(text) = std::str::from_utf8(data) {
            let _ = parser.parse_str_lenient(text);
        }
    }
});
