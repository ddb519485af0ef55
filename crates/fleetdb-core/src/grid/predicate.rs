use crate::{
    grid::{path::ResolvedColumn, source::GridSource},
    traits::EntityValue,
    value::{Value, strict_order},
};
use std::cmp::Ordering;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    #[must_use]
    pub(crate) const fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::Ne => !matches!(ordering, Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Le => !matches!(ordering, Ordering::Greater),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Ge => !matches!(ordering, Ordering::Less),
        }
    }
}

///
/// TextMatchOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMatchOp {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    NotEqual,
}

///
/// Predicate
///
/// One translated boolean constraint over a resolved column. Operands are
/// already coerced to the column's declared kind; text operands are
/// already casefolded. Evaluation through a `Null` column read matches
/// nothing — including `Ne`/`NotEqual`, the SQL three-valued convention.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    Compare {
        column: ResolvedColumn,
        op: CompareOp,
        operand: Value,
    },
    TextMatch {
        column: ResolvedColumn,
        op: TextMatchOp,
        operand: String,
    },
    In {
        column: ResolvedColumn,
        values: Vec<Value>,
    },
    And(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate this predicate against one candidate row.
    pub(crate) fn matches<E, S>(&self, source: &S, row: &E) -> bool
    where
        E: EntityValue,
        S: GridSource<E>,
    {
        match self {
            Self::Compare {
                column,
                op,
                operand,
            } => {
                let value = read_column(source, row, column);

                strict_order(&value, operand).is_some_and(|ordering| op.accepts(ordering))
            }
            Self::TextMatch {
                column,
                op,
                operand,
            } => {
                let value = read_column(source, row, column);
                let Some(text) = value.as_text_like() else {
                    return false;
                };
                let folded = crate::value::casefold(text);

                match op {
                    TextMatchOp::Contains => folded.contains(operand),
                    TextMatchOp::Equals => folded == *operand,
                    TextMatchOp::StartsWith => folded.starts_with(operand),
                    TextMatchOp::EndsWith => folded.ends_with(operand),
                    TextMatchOp::NotEqual => folded != *operand,
                }
            }
            Self::In { column, values } => {
                let value = read_column(source, row, column);

                !value.is_null() && values.contains(&value)
            }
            Self::And(predicates) => predicates.iter().all(|p| p.matches(source, row)),
        }
    }
}

/// Read a resolved column off one row: root fields directly, association
/// fields through the source's outer-join access.
pub(crate) fn read_column<E, S>(source: &S, row: &E, column: &ResolvedColumn) -> Value
where
    E: EntityValue,
    S: GridSource<E>,
{
    match &column.join {
        None => row.field_value(column.field.name).unwrap_or(Value::Null),
        Some(prefix) => source.association_value(row, prefix, column.field.name),
    }
}
