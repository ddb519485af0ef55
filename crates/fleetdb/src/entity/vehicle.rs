use crate::entity::{
    admin::{ADMIN_MODEL, Admin},
    person::{PERSON_MODEL, Person},
};
use fleetdb_core::{
    impl_enum_value,
    model::{AssociationModel, EntityFieldKind, EntityFieldModel, EntityModel, OrderDirection},
    traits::{EntityKind, EntityValue, FieldValue, Path},
    types::{Decimal, Float32, Float64, Id, Timestamp},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// VehicleType
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum VehicleType {
    Car,
    Truck,
    Drone,
    Boat,
}

impl_enum_value!(VehicleType {
    Car => "CAR",
    Truck => "TRUCK",
    Drone => "DRONE",
    Boat => "BOAT",
});

///
/// FuelType
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electricity,
}

impl_enum_value!(FuelType {
    Gasoline => "GASOLINE",
    Diesel => "DIESEL",
    Electricity => "ELECTRICITY",
});

///
/// Vehicle
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Vehicle {
    pub id: Id<Vehicle>,
    pub name: String,
    pub creation_time: Timestamp,
    pub vehicle_type: VehicleType,
    pub engine_power: u32,
    /// Load capacity in kilograms; exact decimal, money-grade precision.
    pub capacity: Decimal,
    pub distance_travelled: Float64,
    pub fuel_consumption: Float32,
    pub fuel_type: FuelType,
    pub owner: Option<Id<Person>>,
    pub admin: Option<Id<Admin>>,
}

pub static VEHICLE_MODEL: EntityModel = EntityModel {
    path: "fleetdb::entity::vehicle::Vehicle",
    entity_name: "vehicle",
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
            name: "creation_time",
            kind: EntityFieldKind::Timestamp,
        },
        EntityFieldModel {
            name: "vehicle_type",
            kind: EntityFieldKind::Enum {
                variants: VehicleType::VARIANT_NAMES,
            },
        },
        EntityFieldModel {
            name: "engine_power",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "capacity",
            kind: EntityFieldKind::Decimal,
        },
        EntityFieldModel {
            name: "distance_travelled",
            kind: EntityFieldKind::Float64,
        },
        EntityFieldModel {
            name: "fuel_consumption",
            kind: EntityFieldKind::Float32,
        },
        EntityFieldModel {
            name: "fuel_type",
            kind: EntityFieldKind::Enum {
                variants: FuelType::VARIANT_NAMES,
            },
        },
    ],
    associations: &[
        AssociationModel {
            name: "owner",
            target: &PERSON_MODEL,
        },
        AssociationModel {
            name: "admin",
            target: &ADMIN_MODEL,
        },
    ],
    default_order: &[
        ("creation_time", OrderDirection::Desc),
        ("id", OrderDirection::Desc),
    ],
};

impl Path for Vehicle {
    const PATH: &'static str = VEHICLE_MODEL.path;
}

impl EntityKind for Vehicle {
    const MODEL: &'static EntityModel = &VEHICLE_MODEL;
}

impl EntityValue for Vehicle {
    fn id(&self) -> Id<Self> {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "creation_time" => Some(self.creation_time.to_value()),
            "vehicle_type" => Some(self.vehicle_type.to_value()),
            "engine_power" => Some(self.engine_power.to_value()),
            "capacity" => Some(self.capacity.to_value()),
            "distance_travelled" => Some(self.distance_travelled.to_value()),
            "fuel_consumption" => Some(self.fuel_consumption.to_value()),
            "fuel_type" => Some(self.fuel_type.to_value()),
            _ => None,
        }
    }
}

///
/// VehicleRecord
/// Hydrated grid row: the vehicle plus its eagerly fetched owner and admin,
/// loaded in the same batch as the vehicle itself.
///

#[derive(Clone, Debug, Serialize)]
pub struct VehicleRecord {
    pub vehicle: Vehicle,
    pub owner: Option<Person>,
    pub admin: Option<Admin>,
}
