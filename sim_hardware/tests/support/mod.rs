// Shared builders for integration tests: a standard vehicle and the wall course.
#![allow(dead_code)]

use sim_hardware::domain::{Obstacle, RigidBodyEngine};
use sim_hardware::interface_adapters::utils::rng::SimRng;
use sim_hardware::use_cases::{QuadVehicle, VehicleSetup};

// Fixed seed so every test binary sees the same noise.
pub const SEED: u64 = 0x5EED;

// Wall one meter thick whose near face sits 9.5 m east of the origin.
pub fn east_wall() -> Obstacle {
    Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0)
}

// One-kilogram body, optionally with the east wall registered.
pub fn engine(with_wall: bool) -> RigidBodyEngine {
    let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
    if with_wall {
        engine.add_obstacle(east_wall());
    }
    engine
}

// Default quad parked at the origin in front of the east wall.
pub fn vehicle() -> QuadVehicle {
    let setup = VehicleSetup {
        obstacles: vec![east_wall()],
        ..VehicleSetup::default()
    };
    QuadVehicle::new(setup, &mut SimRng::seeded(SEED)).expect("valid setup")
}
