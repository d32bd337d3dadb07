// Simulation tuning, kept apart from runtime configuration (tick rate, seed, etc.).

pub mod battery;
pub mod motor;
pub mod physics;
pub mod sensors;
pub mod vehicle;

pub use battery::BatteryTuning;
pub use motor::MotorTuning;
pub use physics::PhysicsTuning;
pub use sensors::{BaroTuning, GpsTuning, ImuTuning, LidarTuning, VioTuning};
pub use vehicle::VehicleTuning;
