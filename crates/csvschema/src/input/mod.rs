//! Raw row source: delimited text to string rows.

pub mod encoding;
mod parser;

pub use encoding_rs::Encoding;
pub use parser::{RawRow, ReaderConfig, RowReader};
