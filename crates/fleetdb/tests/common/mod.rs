//! Shared seed data for the integration suites: two admin accounts, three
//! owners, five vehicles with known identities (1..=5, insertion order).

#![allow(dead_code)]

use chrono::NaiveDate;
use fleetdb::{
    core::types::{Decimal, Float32, Float64, Id, Timestamp},
    db::Db,
    entity::{Admin, FuelType, Person, Role, Vehicle, VehicleType},
};
use std::str::FromStr;

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> Timestamp {
    Timestamp::from_naive(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap(),
    )
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn f32v(x: f32) -> Float32 {
    Float32::try_new(x).unwrap()
}

pub fn f64v(x: f64) -> Float64 {
    Float64::try_new(x).unwrap()
}

pub struct Seeded {
    pub db: Db,
    pub root: Id<Admin>,
    pub clerk: Id<Admin>,
    pub alice: Id<Person>,
    pub bob: Id<Person>,
    pub carol: Id<Person>,
}

#[allow(clippy::too_many_arguments)]
fn add_vehicle(
    db: &mut Db,
    name: &str,
    creation_time: Timestamp,
    vehicle_type: VehicleType,
    engine_power: u32,
    capacity: Decimal,
    distance_travelled: Float64,
    fuel_consumption: Float32,
    fuel_type: FuelType,
    owner: Option<Id<Person>>,
    admin: Option<Id<Admin>>,
) -> Id<Vehicle> {
    let id = db.vehicles_mut().allocate_id();
    db.vehicles_mut().upsert(Vehicle {
        id,
        name: name.to_string(),
        creation_time,
        vehicle_type,
        engine_power,
        capacity,
        distance_travelled,
        fuel_consumption,
        fuel_type,
        owner,
        admin,
    });

    id
}

pub fn seed() -> Seeded {
    let mut db = Db::new();

    let root = db.admins_mut().allocate_id();
    db.admins_mut().upsert(Admin {
        id: root,
        login: "root".to_string(),
        role: Role::Admin,
        created_at: ts(2025, 1, 1, 0, 0, 0, 0),
    });
    let clerk = db.admins_mut().allocate_id();
    db.admins_mut().upsert(Admin {
        id: clerk,
        login: "clerk".to_string(),
        role: Role::User,
        created_at: ts(2025, 2, 1, 0, 0, 0, 0),
    });

    let alice = db.persons_mut().allocate_id();
    db.persons_mut().upsert(Person {
        id: alice,
        name: "Alice".to_string(),
        age: 30,
        created_at: ts(2025, 3, 1, 0, 0, 0, 0),
        admin: Some(root),
    });
    let bob = db.persons_mut().allocate_id();
    db.persons_mut().upsert(Person {
        id: bob,
        name: "Bob".to_string(),
        age: 17,
        created_at: ts(2025, 4, 1, 0, 0, 0, 0),
        admin: Some(clerk),
    });
    let carol = db.persons_mut().allocate_id();
    db.persons_mut().upsert(Person {
        id: carol,
        name: "Carol".to_string(),
        age: 45,
        created_at: ts(2025, 5, 1, 0, 0, 0, 0),
        admin: None,
    });

    add_vehicle(
        &mut db,
        "Atlas Truck",
        ts(2025, 10, 12, 8, 0, 0, 0),
        VehicleType::Truck,
        450,
        dec("12000"),
        f64v(120_000.5),
        f32v(32.5),
        FuelType::Diesel,
        Some(alice),
        Some(root),
    );
    add_vehicle(
        &mut db,
        "City Cab",
        ts(2025, 10, 11, 0, 0, 0, 0),
        VehicleType::Car,
        120,
        dec("400"),
        f64v(80_000.0),
        f32v(7.2),
        FuelType::Gasoline,
        Some(bob),
        Some(clerk),
    );
    add_vehicle(
        &mut db,
        "Farm truck",
        ts(2025, 10, 10, 23, 59, 59, 999),
        VehicleType::Truck,
        300,
        dec("8000.5"),
        f64v(45_000.25),
        f32v(28.0),
        FuelType::Diesel,
        Some(alice),
        None,
    );
    add_vehicle(
        &mut db,
        "Surf Drone",
        ts(2025, 10, 10, 0, 0, 0, 0),
        VehicleType::Drone,
        15,
        dec("2.5"),
        f64v(1_200.0),
        f32v(0.9),
        FuelType::Electricity,
        Some(carol),
        Some(clerk),
    );
    add_vehicle(
        &mut db,
        "River Boat",
        ts(2025, 9, 1, 12, 0, 0, 0),
        VehicleType::Boat,
        90,
        dec("1500"),
        f64v(300.75),
        f32v(15.5),
        FuelType::Gasoline,
        None,
        Some(root),
    );

    Seeded {
        db,
        root,
        clerk,
        alice,
        bob,
        carol,
    }
}
