//! Module: grid::path
//! Responsibility: resolving dotted column identifiers against an entity
//! model, registering outer joins for association crossings.
//! Does not own: predicate construction or join evaluation.

use crate::model::{AssociationModel, EntityFieldModel, EntityModel};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// PathError
///
/// Unknown association or attribute name in a column identifier.
/// Client-input class: surfaces before any query phase executes.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("unknown association '{segment}' on entity '{entity}'")]
    UnknownAssociation {
        entity: &'static str,
        segment: String,
    },

    #[error("unknown field '{segment}' on entity '{entity}'")]
    UnknownField {
        entity: &'static str,
        segment: String,
    },
}

///
/// JoinRegistry
///
/// Per-build mapping from dotted association prefix to its join. At most
/// one join exists per prefix per build; repeated references reuse the
/// registered join. Keyed by prefix, not bare name, so a nested
/// `owner.admin` never collides with a root `admin`.
///

#[derive(Debug, Default)]
pub struct JoinRegistry {
    joins: BTreeMap<String, Join>,
}

///
/// Join
///
/// One registered outer join. Outer, always: the association may be absent
/// and absence must not eliminate the row.
///

#[derive(Debug)]
pub struct Join {
    pub prefix: String,
    pub association: &'static AssociationModel,
}

impl JoinRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse the join registered under `prefix`, or register a new one.
    fn reuse_or_register(&mut self, prefix: &str, association: &'static AssociationModel) {
        if !self.joins.contains_key(prefix) {
            self.joins.insert(
                prefix.to_string(),
                Join {
                    prefix: prefix.to_string(),
                    association,
                },
            );
        }
    }

    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.joins.contains_key(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.joins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Registered join prefixes, in lexical order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.joins.keys().map(String::as_str)
    }
}

///
/// ResolvedColumn
///
/// A typed column reference: the field model plus, for association
/// crossings, the dotted join prefix it reads through.
///

#[derive(Clone, Debug)]
pub struct ResolvedColumn {
    /// Dotted association prefix, `None` for root fields.
    pub join: Option<String>,
    pub field: &'static EntityFieldModel,
}

impl PartialEq for ResolvedColumn {
    fn eq(&self, other: &Self) -> bool {
        self.join == other.join && std::ptr::eq(self.field, other.field)
    }
}

impl Eq for ResolvedColumn {}

/// Resolve a dotted column identifier against the root model.
///
/// A blank identifier defaults to the primary key. Leading segments must
/// each name a declared association on the entity reached so far; each
/// crossing reuses or registers one outer join in `registry`. The final
/// segment must name a scalar field on the last entity reached.
pub fn resolve_column(
    model: &'static EntityModel,
    registry: &mut JoinRegistry,
    column_id: &str,
) -> Result<ResolvedColumn, PathError> {
    let column_id = column_id.trim();

    if column_id.is_empty() {
        let field = model
            .primary_key_field()
            .ok_or_else(|| PathError::UnknownField {
                entity: model.entity_name,
                segment: model.primary_key.to_string(),
            })?;

        return Ok(ResolvedColumn { join: None, field });
    }

    let segments: Vec<&str> = column_id.split('.').collect();
    let [leading @ .., last] = segments.as_slice() else {
        unreachable!("split yields at least one segment");
    };

    let mut current = model;
    let mut prefix = String::new();

    for segment in leading {
        let association =
            current
                .association(segment)
                .ok_or_else(|| PathError::UnknownAssociation {
                    entity: current.entity_name,
                    segment: (*segment).to_string(),
                })?;

        if prefix.is_empty() {
            prefix.push_str(segment);
        } else {
            prefix.push('.');
            prefix.push_str(segment);
        }

        registry.reuse_or_register(&prefix, association);
        current = association.target;
    }

    let field = current.field(last).ok_or_else(|| PathError::UnknownField {
        entity: current.entity_name,
        segment: (*last).to_string(),
    })?;

    Ok(ResolvedColumn {
        join: (!prefix.is_empty()).then_some(prefix),
        field,
    })
}
