mod analytics;
mod person;
mod vehicle;

pub use analytics::VehicleAnalytics;
pub use person::{PersonDraft, PersonService, PersonShort};
pub use vehicle::{VehicleDraft, VehicleService};

use crate::entity::{Admin, Person, Vehicle};
use fleetdb_core::{grid::GridError, types::Id};
use thiserror::Error as ThisError;

///
/// ServiceError
///
/// Service-layer error surface. Everything except `Grid(Internal)` is a
/// client-input class the HTTP layer maps to a 4xx rejection.
///

#[derive(Debug, ThisError)]
pub enum ServiceError {
    #[error("vehicle not found: {0}")]
    VehicleNotFound(Id<Vehicle>),

    #[error("person not found: {0}")]
    PersonNotFound(Id<Person>),

    #[error("admin not found: {0}")]
    AdminNotFound(Id<Admin>),

    #[error("person {id} is still referenced by {vehicles} vehicle(s)")]
    PersonInUse { id: Id<Person>, vehicles: u64 },

    #[error("{0}")]
    Grid(#[from] GridError),
}

impl ServiceError {
    /// True for errors the caller should map to a client-input rejection.
    #[must_use]
    pub const fn is_client_input(&self) -> bool {
        match self {
            Self::Grid(err) => err.is_client_input(),
            _ => true,
        }
    }
}
