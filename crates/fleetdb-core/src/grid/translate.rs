//! Module: grid::translate
//! Responsibility: turning filter/sort models into predicates and order
//! clauses, with the engine's permissive-skip contract.
//! Does not own: path resolution rules (grid::path) or evaluation
//! (grid::predicate, grid::executor).
//!
//! Permissive by contract: unknown filter kinds, unknown operators, blank
//! operands, unparseable dates, and empty set values all resolve to "this
//! descriptor contributes no predicate". Only structurally wrong input for
//! a recognized kind is an error, and it is raised before any query phase
//! executes.

use crate::{
    error::InternalError,
    grid::{
        datetime::{next_day_start, parse_grid_date},
        error::GridError,
        filter::{
            DateFilter, DateOperator, FilterDescriptor, FilterModel, FilterModelError,
            NumberFilter, NumberOperator, SetFilter, TextFilter, TextOperator,
        },
        path::{JoinRegistry, ResolvedColumn, resolve_column},
        predicate::{CompareOp, Predicate, TextMatchOp},
        sort::{OrderDirection, SortModel},
    },
    model::{EntityFieldKind, EntityFieldModel},
    traits::EntityKind,
    types::{Decimal, Float32, Float64, Timestamp},
    value::{Value, casefold},
};
use num_traits::ToPrimitive;
use std::{marker::PhantomData, str::FromStr};

///
/// OrderClause
///

#[derive(Clone, Debug, PartialEq)]
pub struct OrderClause {
    pub column: ResolvedColumn,
    pub direction: OrderDirection,
}

///
/// GridTranslator
///
/// One translator owns one Join Registry for one query build. Both
/// `translate` and `order_by` thread the same registry, so a filter on
/// `owner.name` and a sort on `owner.age` share a single join.
///

pub struct GridTranslator<E: EntityKind> {
    registry: JoinRegistry,
    _marker: PhantomData<E>,
}

impl<E: EntityKind> Default for GridTranslator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityKind> GridTranslator<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: JoinRegistry::new(),
            _marker: PhantomData,
        }
    }

    /// Joins registered by this build so far.
    #[must_use]
    pub const fn registry(&self) -> &JoinRegistry {
        &self.registry
    }

    /// Build the conjunctive predicate list for a filter model.
    pub fn translate(&mut self, filter_model: &FilterModel) -> Result<Vec<Predicate>, GridError> {
        let mut out = Vec::new();

        for (column_id, input) in filter_model {
            // Column resolution precedes kind dispatch: an unknown column
            // is a client error even when the descriptor kind is not.
            let column = resolve_column(E::MODEL, &mut self.registry, column_id)?;

            let Some(descriptor) = FilterDescriptor::parse(column_id, input)? else {
                continue;
            };

            match descriptor {
                FilterDescriptor::Text(filter) => translate_text(column, &filter, &mut out),
                FilterDescriptor::Number(filter) => {
                    translate_number(column_id, column, &filter, &mut out)?;
                }
                FilterDescriptor::Date(filter) => translate_date(column, &filter, &mut out),
                FilterDescriptor::Set(filter) => {
                    translate_set(column_id, column, &filter, &mut out)?;
                }
            }
        }

        Ok(out)
    }

    /// Build the order-clause list for a sort model; an empty model selects
    /// the entity's declared default order.
    pub fn order_by(&mut self, sort_model: &SortModel) -> Result<Vec<OrderClause>, GridError> {
        if sort_model.is_empty() {
            return self.default_order();
        }

        sort_model
            .iter()
            .map(|input| {
                let column = resolve_column(E::MODEL, &mut self.registry, &input.col_id)?;

                Ok(OrderClause {
                    column,
                    direction: input.direction(),
                })
            })
            .collect()
    }

    fn default_order(&mut self) -> Result<Vec<OrderClause>, GridError> {
        E::MODEL
            .default_order
            .iter()
            .map(|(field, direction)| {
                // A broken default order is a schema declaration bug, not
                // client input.
                let column =
                    resolve_column(E::MODEL, &mut self.registry, field).map_err(|err| {
                        GridError::Internal(InternalError::query_unsupported(format!(
                            "default order for '{}': {err}",
                            E::MODEL.entity_name
                        )))
                    })?;

                Ok(OrderClause {
                    column,
                    direction: *direction,
                })
            })
            .collect()
    }
}

/// Casefolded text matching; blank operand or unknown operator → no predicate.
fn translate_text(column: ResolvedColumn, filter: &TextFilter, out: &mut Vec<Predicate>) {
    let Some(op) = filter.op else {
        return;
    };
    let Some(operand) = filter.operand.as_deref() else {
        return;
    };
    if operand.trim().is_empty() {
        return;
    }

    let op = match op {
        TextOperator::Contains => TextMatchOp::Contains,
        TextOperator::Equals => TextMatchOp::Equals,
        TextOperator::StartsWith => TextMatchOp::StartsWith,
        TextOperator::EndsWith => TextMatchOp::EndsWith,
        TextOperator::NotEqual => TextMatchOp::NotEqual,
    };

    out.push(Predicate::TextMatch {
        column,
        op,
        operand: casefold(operand),
    });
}

/// Numeric comparison against the column's declared representation.
fn translate_number(
    column_id: &str,
    column: ResolvedColumn,
    filter: &NumberFilter,
    out: &mut Vec<Predicate>,
) -> Result<(), FilterModelError> {
    // A number filter on a non-numeric column contributes nothing.
    if !column.field.kind.is_numeric() {
        return Ok(());
    }

    let lo = filter
        .operand
        .map(|operand| coerce_number(column_id, column.field, operand))
        .transpose()?;
    let hi = filter
        .operand_to
        .map(|operand| coerce_number(column_id, column.field, operand))
        .transpose()?;

    let Some(op) = filter.op else {
        return Ok(());
    };

    match op {
        NumberOperator::InRange => match (lo, hi) {
            // Closed interval [lo, hi]; one-sided bounds degrade gracefully.
            (Some(lo), Some(hi)) => out.push(Predicate::And(vec![
                Predicate::Compare {
                    column: column.clone(),
                    op: CompareOp::Ge,
                    operand: lo,
                },
                Predicate::Compare {
                    column,
                    op: CompareOp::Le,
                    operand: hi,
                },
            ])),
            (Some(lo), None) => out.push(Predicate::Compare {
                column,
                op: CompareOp::Ge,
                operand: lo,
            }),
            (None, Some(hi)) => out.push(Predicate::Compare {
                column,
                op: CompareOp::Le,
                operand: hi,
            }),
            (None, None) => {}
        },
        op => {
            let Some(operand) = lo else {
                return Ok(());
            };

            let op = match op {
                NumberOperator::Equals => CompareOp::Eq,
                NumberOperator::NotEqual => CompareOp::Ne,
                NumberOperator::LessThan => CompareOp::Lt,
                NumberOperator::LessThanOrEqual => CompareOp::Le,
                NumberOperator::GreaterThan => CompareOp::Gt,
                NumberOperator::GreaterThanOrEqual => CompareOp::Ge,
                NumberOperator::InRange => unreachable!("handled above"),
            };

            out.push(Predicate::Compare {
                column,
                op,
                operand,
            });
        }
    }

    Ok(())
}

/// Calendar-day semantics over timestamp columns.
///
/// `greaterThan` deliberately jumps to the start of the *next* day — the
/// whole `dateFrom` day is excluded, not just its first instant.
fn translate_date(column: ResolvedColumn, filter: &DateFilter, out: &mut Vec<Predicate>) {
    // Date filters apply to timestamp columns only.
    if !column.field.kind.is_timestamp() {
        return;
    }

    let Some(op) = filter.op else {
        return;
    };
    let Some(from) = filter.from.as_deref() else {
        return;
    };
    let Some(from_day) = parse_grid_date(from) else {
        return;
    };

    let start = Timestamp::start_of_day(from_day);

    match op {
        DateOperator::Equals => {
            let Some(end) = next_day_start(from_day) else {
                return;
            };
            out.push(day_interval(column, start, end));
        }
        DateOperator::LessThan => out.push(Predicate::Compare {
            column,
            op: CompareOp::Lt,
            operand: Value::Timestamp(start),
        }),
        DateOperator::GreaterThan => {
            let Some(end) = next_day_start(from_day) else {
                return;
            };
            out.push(Predicate::Compare {
                column,
                op: CompareOp::Ge,
                operand: Value::Timestamp(end),
            });
        }
        DateOperator::InRange => {
            // Absent or unparseable upper day degrades the range to the
            // from-day, making it equivalent to `equals`.
            let to_day = filter
                .to
                .as_deref()
                .and_then(parse_grid_date)
                .unwrap_or(from_day);
            let Some(end) = next_day_start(to_day) else {
                return;
            };
            out.push(day_interval(column, start, end));
        }
    }
}

/// Half-open day interval [start, end).
fn day_interval(column: ResolvedColumn, start: Timestamp, end: Timestamp) -> Predicate {
    Predicate::And(vec![
        Predicate::Compare {
            column: column.clone(),
            op: CompareOp::Ge,
            operand: Value::Timestamp(start),
        },
        Predicate::Compare {
            column,
            op: CompareOp::Lt,
            operand: Value::Timestamp(end),
        },
    ])
}

/// Membership over string-encoded values, coerced to the column kind.
fn translate_set(
    column_id: &str,
    column: ResolvedColumn,
    filter: &SetFilter,
    out: &mut Vec<Predicate>,
) -> Result<(), FilterModelError> {
    if filter.values.is_empty() {
        return Ok(());
    }

    let values = filter
        .values
        .iter()
        .map(|raw| coerce_set_value(column_id, column.field, raw))
        .collect::<Result<Vec<_>, _>>()?;

    out.push(Predicate::In { column, values });

    Ok(())
}

/// Coerce a wire operand (exact decimal) to the column's declared kind.
fn coerce_number(
    column_id: &str,
    field: &EntityFieldModel,
    operand: Decimal,
) -> Result<Value, FilterModelError> {
    let range_error = || FilterModelError::NumberRange {
        column: column_id.to_string(),
        value: operand.to_string(),
        target: field.kind.label(),
    };

    let value = match field.kind {
        // Integer kinds truncate toward zero, as the original did.
        EntityFieldKind::Int => Value::Int(operand.trunc().to_i64().ok_or_else(range_error)?),
        EntityFieldKind::Uint => Value::Uint(operand.trunc().to_u64().ok_or_else(range_error)?),
        EntityFieldKind::Float32 => Value::Float32(
            operand
                .to_f32()
                .and_then(Float32::try_new)
                .ok_or_else(range_error)?,
        ),
        EntityFieldKind::Float64 => Value::Float64(
            operand
                .to_f64()
                .and_then(Float64::try_new)
                .ok_or_else(range_error)?,
        ),
        // Arbitrary-precision columns compare via the exact decimal — the
        // operand never round-trips through a binary float.
        EntityFieldKind::Decimal => Value::Decimal(operand),
        _ => unreachable!("caller checked is_numeric"),
    };

    Ok(value)
}

/// Coerce one set-filter value to the column's declared kind.
fn coerce_set_value(
    column_id: &str,
    field: &EntityFieldModel,
    raw: &str,
) -> Result<Value, FilterModelError> {
    let invalid_number = || FilterModelError::InvalidNumber {
        column: column_id.to_string(),
        value: raw.to_string(),
    };

    let value = match field.kind {
        EntityFieldKind::Enum { variants } => {
            if !variants.iter().any(|v| *v == raw) {
                return Err(FilterModelError::UnknownEnumVariant {
                    column: column_id.to_string(),
                    value: raw.to_string(),
                });
            }

            Value::Enum(raw.to_string())
        }
        EntityFieldKind::Int => Value::Int(raw.trim().parse().map_err(|_| invalid_number())?),
        EntityFieldKind::Uint => Value::Uint(raw.trim().parse().map_err(|_| invalid_number())?),
        EntityFieldKind::Float32 => Value::Float32(
            raw.trim()
                .parse()
                .ok()
                .and_then(Float32::try_new)
                .ok_or_else(invalid_number)?,
        ),
        EntityFieldKind::Float64 => Value::Float64(
            raw.trim()
                .parse()
                .ok()
                .and_then(Float64::try_new)
                .ok_or_else(invalid_number)?,
        ),
        EntityFieldKind::Decimal => {
            Value::Decimal(Decimal::from_str(raw.trim()).map_err(|_| invalid_number())?)
        }
        // Everything else stays a string, as the original left it; a
        // non-text column then simply never matches.
        _ => Value::Text(raw.to_string()),
    };

    Ok(value)
}
