//! Fuzz target for type expressions and value coercion.
//!
//! Checks that resolving any expression against the built-in registry
//! and coercing any value never panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use csvschema::{TypeExpr, TypeRegistry, coerce_value};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    expr: &'a str,
    value: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let registry = TypeRegistry::new();
    let expr = TypeExpr::parse(input.expr);

    // Display must reproduce the source text
    assert_eq!(expr.to_string(), input.expr);

    let _ = coerce_value(&registry, &expr, input.value);
});
