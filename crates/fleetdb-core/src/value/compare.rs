//! Module: value::compare
//! Responsibility: value comparison semantics for predicates and ordering.
//! Does not own: operand coercion (translation-time) or predicate dispatch.

use crate::value::Value;
use std::cmp::Ordering;

/// Strict same-variant ordering.
///
/// Operands are coerced to the column's declared kind at translation time,
/// so a defined ordering only exists between identical variants. Null on
/// either side is undefined: predicates must not match through Null.
#[must_use]
pub(crate) fn strict_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Float32(a), Value::Float32(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) | (Value::Enum(a), Value::Enum(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total ordering for sort keys.
///
/// Null sorts last ascending (descending clauses reverse this, yielding
/// nulls-first — the Postgres defaults the original ran against). Variant
/// mismatches fall back to the canonical rank.
#[must_use]
pub(crate) fn sort_cmp(left: &Value, right: &Value) -> Ordering {
    match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => strict_order(left, right)
            .unwrap_or_else(|| left.canonical_rank().cmp(&right.canonical_rank())),
    }
}

/// Lower-case a string for case-insensitive comparison.
pub(crate) fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}
