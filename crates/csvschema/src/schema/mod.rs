//! Schema types: ordered field definitions and type expressions.

mod table;
mod types;

pub use table::Schema;
pub use types::{PARAMETER_SEPARATOR, TypeExpr};
