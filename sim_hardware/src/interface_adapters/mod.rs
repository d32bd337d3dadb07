// Interface adapters: hardware-adapter contract, telemetry DTOs and the default RNG.

pub mod hardware;
pub mod protocol;
pub mod utils;

pub use hardware::{Actuator, HardwareAdapter, Sensor};
