//! FleetDB: a schema-first typed grid query engine and persistence core for
//! fleet administration backends. This crate carries the concrete domain
//! schema (vehicles, persons, admins) and the service layer; the engine
//! lives in `fleetdb-core`.

pub mod db;
pub mod entity;
pub mod service;

pub use fleetdb_core as core;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        db::Db,
        entity::{Admin, FuelType, Person, Role, Vehicle, VehicleType},
        service::{PersonService, ServiceError, VehicleAnalytics, VehicleService},
    };
    pub use fleetdb_core::{
        config::GridConfig,
        grid::{GridRequest, GridResponse},
        types::{Id, Timestamp},
    };
}
