// Domain-level simulation state and the snapshots handed out to readers.

use super::obstacle::Obstacle;
use super::vector::Vector3;
use std::sync::Arc;

/// Kinematic state of the rigid body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub position: Vector3,     // m
    pub velocity: Vector3,     // m/s
    pub acceleration: Vector3, // m/s²
}

/// What measurement models see of the engine after each update.
///
/// The obstacle list is shared, never copied per tick; it only changes during setup.
#[derive(Debug, Clone, Default)]
pub struct BodySnapshot {
    pub state: BodyState,
    pub obstacles: Arc<Vec<Obstacle>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Cw,
    Ccw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorStatus {
    pub id: u32,
    pub rpm: f64,
    pub throttle: f64, // 0.0..=1.0
    pub max_rpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub voltage: f64,       // V, terminal
    pub current: f64,       // A
    pub capacity_mah: f64,  // mAh
    pub remaining_mah: f64, // mAh, never negative
    pub cell_count: u32,
    pub temperature: f64, // °C
}
