use crate::entity::admin::{ADMIN_MODEL, Admin};
use fleetdb_core::{
    model::{AssociationModel, EntityFieldKind, EntityFieldModel, EntityModel, OrderDirection},
    traits::{EntityKind, EntityValue, FieldValue, Path},
    types::{Id, Timestamp},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Person
/// Vehicle owner.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Person {
    pub id: Id<Person>,
    pub name: String,
    pub age: u32,
    pub created_at: Timestamp,
    pub admin: Option<Id<Admin>>,
}

pub static PERSON_MODEL: EntityModel = EntityModel {
    path: "fleetdb::entity::person::Person",
    entity_name: "person",
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
        EntityFieldModel {
            name: "created_at",
            kind: EntityFieldKind::Timestamp,
        },
    ],
    associations: &[AssociationModel {
        name: "admin",
        target: &ADMIN_MODEL,
    }],
    default_order: &[
        ("created_at", OrderDirection::Desc),
        ("id", OrderDirection::Desc),
    ],
};

impl Path for Person {
    const PATH: &'static str = PERSON_MODEL.path;
}

impl EntityKind for Person {
    const MODEL: &'static EntityModel = &PERSON_MODEL;
}

impl EntityValue for Person {
    fn id(&self) -> Id<Self> {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "age" => Some(self.age.to_value()),
            "created_at" => Some(self.created_at.to_value()),
            _ => None,
        }
    }
}

///
/// PersonRecord
/// Hydrated grid row: the person plus the eagerly fetched admin account.
///

#[derive(Clone, Debug, Serialize)]
pub struct PersonRecord {
    pub person: Person,
    pub admin: Option<Admin>,
}
