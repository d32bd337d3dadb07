// Use-case level inputs/outputs for the vehicle tick.

use crate::domain::tuning::{BatteryTuning, MotorTuning, PhysicsTuning, VehicleTuning};
use crate::domain::{BatteryStatus, BodyState, Obstacle, Vector3};

/// Everything needed to assemble one simulated vehicle and its world.
#[derive(Debug, Clone)]
pub struct VehicleSetup {
    pub mass: f64, // kg
    pub cell_count: u32,
    pub capacity_mah: f64,
    pub obstacles: Vec<Obstacle>,

    pub physics: PhysicsTuning,
    pub motor: MotorTuning,
    pub battery: BatteryTuning,
    pub tuning: VehicleTuning,
}

impl Default for VehicleSetup {
    fn default() -> Self {
        Self {
            mass: 1.5,
            cell_count: 4,
            capacity_mah: 5000.0,
            obstacles: Vec::new(),
            physics: PhysicsTuning::default(),
            motor: MotorTuning::default(),
            battery: BatteryTuning::default(),
            tuning: VehicleTuning::default(),
        }
    }
}

/// Result of a single vehicle tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub body: BodyState,
    pub thrust: Vector3, // N, world frame
    pub battery: BatteryStatus,
}
