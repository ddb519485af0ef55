//! Module: db
//! Responsibility: the aggregate database — one store per entity — and the
//! grid storage ports for the two grid-served roots.
//! Does not own: translation or execution (fleetdb-core::grid).

use crate::entity::{Admin, Person, PersonRecord, Vehicle, VehicleRecord};
use fleetdb_core::{
    config::GridConfig,
    grid::{GridExecutor, GridSource},
    store::Store,
    traits::EntityValue,
    types::Id,
    value::Value,
};

///
/// Db
///
/// Plain owned data behind `&`/`&mut` discipline: readers may run
/// concurrently against `&Db`; writers take `&mut Db`. The engine itself
/// takes no locks and keeps no per-request state here.
///

#[derive(Debug, Default)]
pub struct Db {
    pub(crate) vehicles: Store<Vehicle>,
    pub(crate) persons: Store<Person>,
    pub(crate) admins: Store<Admin>,
    config: GridConfig,
}

impl Db {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Direct store access, for seeding and bulk tooling.
    #[must_use]
    pub const fn vehicles(&self) -> &Store<Vehicle> {
        &self.vehicles
    }

    pub const fn vehicles_mut(&mut self) -> &mut Store<Vehicle> {
        &mut self.vehicles
    }

    #[must_use]
    pub const fn persons(&self) -> &Store<Person> {
        &self.persons
    }

    pub const fn persons_mut(&mut self) -> &mut Store<Person> {
        &mut self.persons
    }

    #[must_use]
    pub const fn admins(&self) -> &Store<Admin> {
        &self.admins
    }

    pub const fn admins_mut(&mut self) -> &mut Store<Admin> {
        &mut self.admins
    }

    /// Grid read path over vehicles.
    #[must_use]
    pub const fn vehicle_grid(&self) -> GridExecutor<'_, Vehicle, Self> {
        GridExecutor::new(self, self.config)
    }

    /// Grid read path over persons.
    #[must_use]
    pub const fn person_grid(&self) -> GridExecutor<'_, Person, Self> {
        GridExecutor::new(self, self.config)
    }

    pub(crate) fn person_of(&self, vehicle: &Vehicle) -> Option<&Person> {
        vehicle.owner.and_then(|id| self.persons.get(id))
    }

    pub(crate) fn admin_by(&self, id: Option<Id<Admin>>) -> Option<&Admin> {
        id.and_then(|id| self.admins.get(id))
    }
}

impl GridSource<Vehicle> for Db {
    type Row = VehicleRecord;

    fn scan(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.scan()
    }

    fn fetch_rows(&self, ids: &[Id<Vehicle>]) -> Vec<VehicleRecord> {
        self.vehicles
            .get_many(ids)
            .into_iter()
            .map(|vehicle| {
                let owner = self.person_of(&vehicle).cloned();
                let admin = self.admin_by(vehicle.admin).cloned();

                VehicleRecord {
                    vehicle,
                    owner,
                    admin,
                }
            })
            .collect()
    }

    fn row_id(row: &VehicleRecord) -> Id<Vehicle> {
        row.vehicle.id()
    }

    fn association_value(&self, row: &Vehicle, join: &str, field: &str) -> Value {
        let value = match join {
            "owner" => self
                .person_of(row)
                .and_then(|person| person.field_value(field)),
            "admin" => self
                .admin_by(row.admin)
                .and_then(|admin| admin.field_value(field)),
            "owner.admin" => self
                .person_of(row)
                .and_then(|person| self.admin_by(person.admin))
                .and_then(|admin| admin.field_value(field)),
            _ => None,
        };

        value.unwrap_or(Value::Null)
    }
}

impl GridSource<Person> for Db {
    type Row = PersonRecord;

    fn scan(&self) -> impl Iterator<Item = &Person> {
        self.persons.scan()
    }

    fn fetch_rows(&self, ids: &[Id<Person>]) -> Vec<PersonRecord> {
        self.persons
            .get_many(ids)
            .into_iter()
            .map(|person| {
                let admin = self.admin_by(person.admin).cloned();

                PersonRecord { person, admin }
            })
            .collect()
    }

    fn row_id(row: &PersonRecord) -> Id<Person> {
        row.person.id()
    }

    fn association_value(&self, row: &Person, join: &str, field: &str) -> Value {
        let value = match join {
            "admin" => self
                .admin_by(row.admin)
                .and_then(|admin| admin.field_value(field)),
            _ => None,
        };

        value.unwrap_or(Value::Null)
    }
}
