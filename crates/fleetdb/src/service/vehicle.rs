use crate::{
    db::Db,
    entity::{Admin, FuelType, Person, Vehicle, VehicleRecord, VehicleType},
    service::ServiceError,
};
use fleetdb_core::{
    grid::{GridRequest, GridResponse},
    traits::EntityValue,
    types::{Decimal, Float32, Float64, Id, Timestamp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

///
/// VehicleDraft
/// Caller-supplied vehicle state for create/update. The owner is required
/// at this boundary even though the column itself is nullable.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VehicleDraft {
    pub name: String,
    pub vehicle_type: VehicleType,
    pub engine_power: u32,
    pub capacity: Decimal,
    pub distance_travelled: Float64,
    pub fuel_consumption: Float32,
    pub fuel_type: FuelType,
    pub owner: Id<Person>,
    pub admin: Option<Id<Admin>>,
}

///
/// VehicleService
///

pub struct VehicleService<'a> {
    db: &'a mut Db,
}

impl<'a> VehicleService<'a> {
    #[must_use]
    pub const fn new(db: &'a mut Db) -> Self {
        Self { db }
    }

    /// Create a vehicle; the owner (and admin, when given) must exist.
    pub fn create(&mut self, draft: VehicleDraft) -> Result<Id<Vehicle>, ServiceError> {
        self.check_references(&draft)?;

        let id = self.db.vehicles.allocate_id();
        self.db.vehicles.upsert(Self::materialize(id, Timestamp::now(), draft));

        Ok(id)
    }

    /// Full replace of an existing vehicle; identity and creation time are
    /// preserved.
    pub fn update(&mut self, id: Id<Vehicle>, draft: VehicleDraft) -> Result<(), ServiceError> {
        let creation_time = self
            .db
            .vehicles
            .get(id)
            .ok_or(ServiceError::VehicleNotFound(id))?
            .creation_time;
        self.check_references(&draft)?;

        self.db.vehicles.upsert(Self::materialize(id, creation_time, draft));

        Ok(())
    }

    pub fn get(&self, id: Id<Vehicle>) -> Result<&Vehicle, ServiceError> {
        self.db
            .vehicles
            .get(id)
            .ok_or(ServiceError::VehicleNotFound(id))
    }

    pub fn delete(&mut self, id: Id<Vehicle>) -> Result<(), ServiceError> {
        self.db
            .vehicles
            .remove(id)
            .map(|_| ())
            .ok_or(ServiceError::VehicleNotFound(id))
    }

    /// All vehicles, newest first (`creation_time desc, id desc`).
    #[must_use]
    pub fn list_all(&self) -> Vec<Vehicle> {
        let mut rows: Vec<Vehicle> = self.db.vehicles.scan().cloned().collect();
        rows.sort_by_key(|v| Reverse((v.creation_time, v.id())));

        rows
    }

    /// A window of the default order; offset clamps to 0, limit to ≥ 1.
    #[must_use]
    pub fn list_page(&self, offset: i64, limit: i64) -> Vec<Vehicle> {
        #[allow(clippy::cast_sign_loss)]
        let offset = offset.max(0) as usize;
        #[allow(clippy::cast_sign_loss)]
        let limit = limit.max(1) as usize;

        self.list_all().into_iter().skip(offset).take(limit).collect()
    }

    /// Vehicles of one owner, id ascending.
    #[must_use]
    pub fn find_by_owner(&self, owner: Id<Person>) -> Vec<Vehicle> {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.owner == Some(owner))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count_by_owner(&self, owner: Id<Person>) -> u64 {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.owner == Some(owner))
            .count() as u64
    }

    /// Grid page plus total count, hydrated with owner and admin.
    pub fn query(
        &self,
        request: &GridRequest,
    ) -> Result<GridResponse<VehicleRecord>, ServiceError> {
        Ok(self.db.vehicle_grid().query(request)?)
    }

    /// Grid count only.
    pub fn count(&self, request: &GridRequest) -> Result<u64, ServiceError> {
        Ok(self.db.vehicle_grid().count(request)?)
    }

    fn check_references(&self, draft: &VehicleDraft) -> Result<(), ServiceError> {
        if !self.db.persons.contains(draft.owner) {
            return Err(ServiceError::PersonNotFound(draft.owner));
        }
        if let Some(admin) = draft.admin {
            if !self.db.admins.contains(admin) {
                return Err(ServiceError::AdminNotFound(admin));
            }
        }

        Ok(())
    }

    fn materialize(id: Id<Vehicle>, creation_time: Timestamp, draft: VehicleDraft) -> Vehicle {
        Vehicle {
            id,
            name: draft.name,
            creation_time,
            vehicle_type: draft.vehicle_type,
            engine_power: draft.engine_power,
            capacity: draft.capacity,
            distance_travelled: draft.distance_travelled,
            fuel_consumption: draft.fuel_consumption,
            fuel_type: draft.fuel_type,
            owner: Some(draft.owner),
            admin: draft.admin,
        }
    }
}
