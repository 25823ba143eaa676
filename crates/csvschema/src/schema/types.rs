//! Type expressions: `name` or `name:parameter`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator between a type name and its parameter.
pub const PARAMETER_SEPARATOR: char = ':';

/// A parsed type expression.
///
/// Only the first `:` is structural; everything after it is the parameter,
/// kept verbatim (so `array::` has the parameter `":"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeExpr {
    name: String,
    parameter: Option<String>,
}

impl TypeExpr {
    /// Parse a type expression. Never fails; unknown names are only
    /// detected when the expression is resolved against a registry.
    pub fn parse(expr: &str) -> Self {
        match expr.split_once(PARAMETER_SEPARATOR) {
            Some((name, parameter)) => Self {
                name: name.to_string(),
                parameter: Some(parameter.to_string()),
            },
            None => Self {
                name: expr.to_string(),
                parameter: None,
            },
        }
    }

    /// Build an expression from its parts.
    pub fn new(name: impl Into<String>, parameter: Option<String>) -> Self {
        Self {
            name: name.into(),
            parameter,
        }
    }

    /// The type name used for registry lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw parameter, if the expression had a `:`.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(p) => write!(f, "{}{}{}", self.name, PARAMETER_SEPARATOR, p),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for TypeExpr {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for TypeExpr {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for TypeExpr {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<TypeExpr> for String {
    fn from(expr: TypeExpr) -> Self {
        expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_name() {
        let expr = TypeExpr::parse("int");
        assert_eq!(expr.name(), "int");
        assert_eq!(expr.parameter(), None);
    }

    #[test]
    fn test_parse_with_parameter() {
        let expr = TypeExpr::parse("array:,");
        assert_eq!(expr.name(), "array");
        assert_eq!(expr.parameter(), Some(","));
    }

    #[test]
    fn test_only_first_separator_splits() {
        let expr = TypeExpr::parse("array::");
        assert_eq!(expr.name(), "array");
        assert_eq!(expr.parameter(), Some(":"));

        let expr = TypeExpr::parse("date:%H:%M");
        assert_eq!(expr.parameter(), Some("%H:%M"));
    }

    #[test]
    fn test_empty_parameter_is_present() {
        let expr = TypeExpr::parse("array:");
        assert_eq!(expr.parameter(), Some(""));
    }

    #[test]
    fn test_display_round_trips_source() {
        for src in ["string", "array:|", "multiply:2", "x::y"] {
            assert_eq!(TypeExpr::parse(src).to_string(), src);
        }
    }
}
