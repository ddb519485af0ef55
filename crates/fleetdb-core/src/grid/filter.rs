use crate::types::Decimal;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};
use thiserror::Error as ThisError;

///
/// FilterModel
///
/// Mapping from column identifier to one filter descriptor. Entry order is
/// irrelevant; all resulting predicates are conjunctive.
///

pub type FilterModel = BTreeMap<String, FilterInput>;

///
/// FilterInput
///
/// One column's filter descriptor as decoded from the UI contract. The
/// shape is deliberately loose — which fields are meaningful depends on
/// `filterType`, and partially-understood input must degrade to "no
/// constraint", never to a fault.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterInput {
    /// Filter kind: `text` | `number` | `date` | `set`.
    pub filter_type: String,
    /// Operator within the kind (`contains`, `inRange`, ...).
    #[serde(rename = "type")]
    pub op: Option<String>,
    /// Primary operand for text/number kinds.
    pub filter: Option<ScalarInput>,
    /// Upper bound for number `inRange`.
    pub filter_to: Option<ScalarInput>,
    /// Day (or day-carrying) strings for the date kind.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// String-encoded membership values for the set kind.
    pub values: Option<Vec<String>>,
}

///
/// ScalarInput
///
/// A loosely-typed wire operand: the UI sends strings or JSON numbers
/// interchangeably for numeric filters.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScalarInput {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ScalarInput {
    /// Borrow the textual payload, when this operand is a string.
    #[must_use]
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Exact decimal rendition of a numeric operand.
    ///
    /// Floats go through their shortest round-trip decimal string, never
    /// through binary expansion, so `10.1` stays exactly `10.1`.
    #[must_use]
    pub(crate) fn to_exact_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Int(v) => Some(Decimal::from(*v)),
            Self::Float(v) => Decimal::from_str(&v.to_string()).ok(),
            Self::Text(s) => Decimal::from_str(s.trim()).ok(),
            Self::Bool(_) => None,
        }
    }
}

///
/// FilterModelError
///
/// Structurally malformed input for a *recognized* filter kind. Client-input
/// class: raised from translation, before any query phase executes. Unknown
/// kinds and operators are not errors — they contribute no predicate.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum FilterModelError {
    #[error("column '{column}': {kind} filter operand must be a {expected}")]
    OperandType {
        column: String,
        kind: &'static str,
        expected: &'static str,
    },

    #[error("column '{column}': cannot parse '{value}' as a number")]
    InvalidNumber { column: String, value: String },

    #[error("column '{column}': value '{value}' is not representable as {target}")]
    NumberRange {
        column: String,
        value: String,
        target: &'static str,
    },

    #[error("column '{column}': '{value}' is not a declared enum variant")]
    UnknownEnumVariant { column: String, value: String },
}

///
/// FilterDescriptor
///
/// The closed, typed form of one filter descriptor. Dispatch is by pattern
/// match over this union, never by re-inspecting wire strings.
///

#[derive(Clone, Debug)]
pub(crate) enum FilterDescriptor {
    Text(TextFilter),
    Number(NumberFilter),
    Date(DateFilter),
    Set(SetFilter),
}

#[derive(Clone, Debug)]
pub(crate) struct TextFilter {
    pub op: Option<TextOperator>,
    pub operand: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TextOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    NotEqual,
}

#[derive(Clone, Debug)]
pub(crate) struct NumberFilter {
    pub op: Option<NumberOperator>,
    pub operand: Option<Decimal>,
    pub operand_to: Option<Decimal>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NumberOperator {
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InRange,
}

#[derive(Clone, Debug)]
pub(crate) struct DateFilter {
    pub op: Option<DateOperator>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DateOperator {
    Equals,
    LessThan,
    GreaterThan,
    InRange,
}

#[derive(Clone, Debug)]
pub(crate) struct SetFilter {
    pub values: Vec<String>,
}

impl TextOperator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "contains" => Some(Self::Contains),
            "equals" => Some(Self::Equals),
            "startsWith" => Some(Self::StartsWith),
            "endsWith" => Some(Self::EndsWith),
            "notEqual" => Some(Self::NotEqual),
            _ => None,
        }
    }
}

impl NumberOperator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "equals" => Some(Self::Equals),
            "notEqual" => Some(Self::NotEqual),
            "lessThan" => Some(Self::LessThan),
            "lessThanOrEqual" => Some(Self::LessThanOrEqual),
            "greaterThan" => Some(Self::GreaterThan),
            "greaterThanOrEqual" => Some(Self::GreaterThanOrEqual),
            "inRange" => Some(Self::InRange),
            _ => None,
        }
    }
}

impl DateOperator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "equals" => Some(Self::Equals),
            "lessThan" => Some(Self::LessThan),
            "greaterThan" => Some(Self::GreaterThan),
            "inRange" => Some(Self::InRange),
            _ => None,
        }
    }
}

impl FilterDescriptor {
    /// Parse a wire descriptor into the closed union.
    ///
    /// `Ok(None)` — unrecognized kind, no constraint. `Err` — recognized
    /// kind with a structurally wrong operand.
    pub(crate) fn parse(
        column: &str,
        input: &FilterInput,
    ) -> Result<Option<Self>, FilterModelError> {
        let descriptor = match input.filter_type.as_str() {
            "text" => {
                let operand = match &input.filter {
                    None => None,
                    Some(scalar) => Some(
                        scalar
                            .as_text()
                            .ok_or_else(|| FilterModelError::OperandType {
                                column: column.to_string(),
                                kind: "text",
                                expected: "string",
                            })?
                            .to_string(),
                    ),
                };

                Self::Text(TextFilter {
                    op: input.op.as_deref().and_then(TextOperator::parse),
                    operand,
                })
            }
            "number" => Self::Number(NumberFilter {
                op: input.op.as_deref().and_then(NumberOperator::parse),
                operand: parse_number_operand(column, input.filter.as_ref())?,
                operand_to: parse_number_operand(column, input.filter_to.as_ref())?,
            }),
            "date" => Self::Date(DateFilter {
                op: input.op.as_deref().and_then(DateOperator::parse),
                from: input.date_from.clone(),
                to: input.date_to.clone(),
            }),
            "set" => Self::Set(SetFilter {
                values: input.values.clone().unwrap_or_default(),
            }),
            _ => return Ok(None),
        };

        Ok(Some(descriptor))
    }
}

fn parse_number_operand(
    column: &str,
    operand: Option<&ScalarInput>,
) -> Result<Option<Decimal>, FilterModelError> {
    let Some(scalar) = operand else {
        return Ok(None);
    };

    scalar
        .to_exact_decimal()
        .map(Some)
        .ok_or_else(|| match scalar {
            ScalarInput::Text(s) => FilterModelError::InvalidNumber {
                column: column.to_string(),
                value: s.clone(),
            },
            _ => FilterModelError::OperandType {
                column: column.to_string(),
                kind: "number",
                expected: "number",
            },
        })
}
