use crate::{
    db::Db,
    entity::{Vehicle, VehicleType},
};
use fleetdb_core::types::Float32;

///
/// VehicleAnalytics
///
/// Fixed read-only queries the admin UI exposes next to the grid. All of
/// them are full scans over the vehicle store; none mutate.
///

pub struct VehicleAnalytics<'a> {
    db: &'a Db,
}

impl<'a> VehicleAnalytics<'a> {
    #[must_use]
    pub const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Any one vehicle with the minimal distance travelled; ties resolve to
    /// the lowest id.
    #[must_use]
    pub fn any_with_min_distance(&self) -> Option<&Vehicle> {
        self.db
            .vehicles
            .scan()
            .min_by_key(|v| v.distance_travelled)
    }

    #[must_use]
    pub fn count_fuel_consumption_greater_than(&self, threshold: Float32) -> u64 {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.fuel_consumption > threshold)
            .count() as u64
    }

    /// Vehicles above the consumption threshold, id ascending.
    #[must_use]
    pub fn list_fuel_consumption_greater_than(&self, threshold: Float32) -> Vec<&Vehicle> {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.fuel_consumption > threshold)
            .collect()
    }

    /// Vehicles of one declared type, id ascending.
    #[must_use]
    pub fn list_by_type(&self, vehicle_type: VehicleType) -> Vec<&Vehicle> {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.vehicle_type == vehicle_type)
            .collect()
    }

    /// Vehicles with engine power in the closed range [min, max].
    #[must_use]
    pub fn list_by_engine_power_between(&self, min: u32, max: u32) -> Vec<&Vehicle> {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.engine_power >= min && v.engine_power <= max)
            .collect()
    }
}
