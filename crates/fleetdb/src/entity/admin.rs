use fleetdb_core::{
    impl_enum_value,
    model::{EntityFieldKind, EntityFieldModel, EntityModel, OrderDirection},
    traits::{EntityKind, EntityValue, FieldValue, Path},
    types::{Id, Timestamp},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Role
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl_enum_value!(Role {
    Admin => "ADMIN",
    User => "USER",
});

///
/// Admin
/// Back-office account that created or manages a row.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Admin {
    pub id: Id<Admin>,
    pub login: String,
    pub role: Role,
    pub created_at: Timestamp,
}

pub static ADMIN_MODEL: EntityModel = EntityModel {
    path: "fleetdb::entity::admin::Admin",
    entity_name: "admin",
    primary_key: "id",
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "login",
            kind: EntityFieldKind::Text,
        },
        EntityFieldModel {
            name: "role",
            kind: EntityFieldKind::Enum {
                variants: Role::VARIANT_NAMES,
            },
        },
        EntityFieldModel {
            name: "created_at",
            kind: EntityFieldKind::Timestamp,
        },
    ],
    associations: &[],
    default_order: &[("id", OrderDirection::Asc)],
};

impl Path for Admin {
    const PATH: &'static str = ADMIN_MODEL.path;
}

impl EntityKind for Admin {
    const MODEL: &'static EntityModel = &ADMIN_MODEL;
}

impl EntityValue for Admin {
    fn id(&self) -> Id<Self> {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "login" => Some(self.login.to_value()),
            "role" => Some(self.role.to_value()),
            "created_at" => Some(self.created_at.to_value()),
            _ => None,
        }
    }
}
