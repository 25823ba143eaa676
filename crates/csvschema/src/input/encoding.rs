//! Text encodings accepted by the row reader.
//!
//! Labels follow the WHATWG Encoding Standard via `encoding_rs`, so
//! `"latin1"` and `"ISO-8859-1"` both name windows-1252.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Result, SchemaError};

/// Label used when a config names no encoding.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// The default input encoding.
pub fn default_encoding() -> &'static Encoding {
    UTF_8
}

/// Resolve an encoding label such as `"utf-8"`, `"windows-1252"` or
/// `"UTF-16LE"`. Case and surrounding whitespace are ignored.
pub fn resolve_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| SchemaError::Encoding(format!("unsupported encoding '{}'", label.trim())))
}

/// Decode raw bytes to text. A byte order mark matching `encoding` is
/// dropped; malformed input is an error rather than replacement characters.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(SchemaError::Encoding(format!(
            "input is not valid {}",
            encoding.name()
        )));
    }
    Ok(text)
}
