// Use cases layer: measurement models and the vehicle tick built on the domain.

pub mod sensors;
pub mod types;
pub mod vehicle;

pub use types::{TickReport, VehicleSetup};
pub use vehicle::QuadVehicle;
