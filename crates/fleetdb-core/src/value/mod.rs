mod compare;


pub(crate) use compare::{casefold, sort_cmp, strict_order};

use crate::types::{Decimal, Float32, Float64, Timestamp};
use serde::Serialize;
use std::fmt;

///
/// Value
/// Runtime scalar for column reads and predicate operands.
///
/// Null → the field's value is `Option::None` (i.e., SQL NULL). A Null
/// column read matches no predicate but never eliminates the row itself.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(Float32),
    Float64(Float64),
    Decimal(Decimal),
    Text(String),
    Enum(String),
    Timestamp(Timestamp),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Deterministic variant rank used when strict ordering is undefined.
    /// Null ranks greatest so it sorts last in ascending order.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::Uint(_) => 2,
            Self::Float32(_) => 3,
            Self::Float64(_) => 4,
            Self::Decimal(_) => 5,
            Self::Text(_) => 6,
            Self::Enum(_) => 7,
            Self::Timestamp(_) => 8,
            Self::Null => u8::MAX,
        }
    }

    /// Borrow the textual content of text-like variants.
    ///
    /// Text matching operates on Text and Enum values only; other scalars
    /// are not implicitly cast to strings.
    #[must_use]
    pub(crate) fn as_text_like(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Uint(v) => v.fmt(f),
            Self::Float32(v) => v.fmt(f),
            Self::Float64(v) => v.fmt(f),
            Self::Decimal(v) => v.fmt(f),
            Self::Text(v) | Self::Enum(v) => v.fmt(f),
            Self::Timestamp(v) => v.fmt(f),
        }
    }
}
