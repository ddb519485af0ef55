//! Shared fixture schema for engine tests: a two-entity world with one
//! nullable to-one association, small enough to reason about by hand.

use crate::{
    grid::GridSource,
    impl_enum_value,
    model::{AssociationModel, EntityFieldKind, EntityFieldModel, EntityModel, OrderDirection},
    store::Store,
    traits::{EntityKind, EntityValue, FieldValue, Path},
    types::{Decimal, Id, Timestamp},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Operator
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Operator {
    pub id: Id<Operator>,
    pub name: String,
    pub age: u64,
}

pub(crate) static OPERATOR_MODEL: EntityModel = EntityModel {
    path: "fleetdb_core::test_fixtures::Operator",
    entity_name: "operator",
    primary_key: "id",
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "name",
            kind: EntityFieldKind::Text,
        },
        EntityFieldModel {
            name: "age",
            kind: EntityFieldKind::Uint,
        },
    ],
    associations: &[],
    default_order: &[("id", OrderDirection::Asc)],
};

impl Path for Operator {
    const PATH: &'static str = OPERATOR_MODEL.path;
}

impl EntityKind for Operator {
    const MODEL: &'static EntityModel = &OPERATOR_MODEL;
}

impl EntityValue for Operator {
    fn id(&self) -> Id<Self> {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "age" => Some(self.age.to_value()),
            _ => None,
        }
    }
}

///
/// RigStatus
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) enum RigStatus {
    Active,
    Idle,
}

impl_enum_value!(RigStatus {
    Active => "ACTIVE",
    Idle => "IDLE",
});

///
/// Rig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Rig {
    pub id: Id<Rig>,
    pub label: String,
    pub power: u64,
    pub price: Decimal,
    pub status: RigStatus,
    pub made_at: Timestamp,
    pub operator: Option<Id<Operator>>,
}

pub(crate) static RIG_MODEL: EntityModel = EntityModel {
    path: "fleetdb_core::test_fixtures::Rig",
    entity_name: "rig",
    primary_key: "id",
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "label",
            kind: EntityFieldKind::Text,
        },
        EntityFieldModel {
            name: "power",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "price",
            kind: EntityFieldKind::Decimal,
        },
        EntityFieldModel {
            name: "status",
            kind: EntityFieldKind::Enum {
                variants: RigStatus::VARIANT_NAMES,
            },
        },
        EntityFieldModel {
            name: "made_at",
            kind: EntityFieldKind::Timestamp,
        },
    ],
    associations: &[AssociationModel {
        name: "operator",
        target: &OPERATOR_MODEL,
    }],
    default_order: &[
        ("made_at", OrderDirection::Desc),
        ("id", OrderDirection::Desc),
    ],
};

impl Path for Rig {
    const PATH: &'static str = RIG_MODEL.path;
}

impl EntityKind for Rig {
    const MODEL: &'static EntityModel = &RIG_MODEL;
}

impl EntityValue for Rig {
    fn id(&self) -> Id<Self> {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "label" => Some(self.label.to_value()),
            "power" => Some(self.power.to_value()),
            "price" => Some(self.price.to_value()),
            "status" => Some(self.status.to_value()),
            "made_at" => Some(self.made_at.to_value()),
            _ => None,
        }
    }
}

///
/// RigRow
/// Hydrated page row: the rig plus its eagerly fetched operator.
///

#[derive(Clone, Debug)]
pub(crate) struct RigRow {
    pub rig: Rig,
    pub operator: Option<Operator>,
}

///
/// TestDb
///

#[derive(Debug, Default)]
pub(crate) struct TestDb {
    pub rigs: Store<Rig>,
    pub operators: Store<Operator>,
}

impl TestDb {
    pub fn add_operator(&mut self, name: &str, age: u64) -> Id<Operator> {
        let id = self.operators.allocate_id();
        self.operators.upsert(Operator {
            id,
            name: name.to_string(),
            age,
        });

        id
    }

    pub fn add_rig(
        &mut self,
        label: &str,
        power: u64,
        price: Decimal,
        status: RigStatus,
        made_at: Timestamp,
        operator: Option<Id<Operator>>,
    ) -> Id<Rig> {
        let id = self.rigs.allocate_id();
        self.rigs.upsert(Rig {
            id,
            label: label.to_string(),
            power,
            price,
            status,
            made_at,
            operator,
        });

        id
    }
}

impl GridSource<Rig> for TestDb {
    type Row = RigRow;

    fn scan(&self) -> impl Iterator<Item = &Rig> {
        self.rigs.scan()
    }

    fn fetch_rows(&self, ids: &[Id<Rig>]) -> Vec<RigRow> {
        self.rigs
            .get_many(ids)
            .into_iter()
            .map(|rig| {
                let operator = rig
                    .operator
                    .and_then(|id| self.operators.get(id))
                    .cloned();

                RigRow { rig, operator }
            })
            .collect()
    }

    fn row_id(row: &RigRow) -> Id<Rig> {
        row.rig.id()
    }

    fn association_value(&self, row: &Rig, join: &str, field: &str) -> Value {
        match join {
            "operator" => row
                .operator
                .and_then(|id| self.operators.get(id))
                .and_then(|operator| operator.field_value(field))
                .unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }
}
