// Domain layer: simulation types, physics and component models.

pub mod errors;
pub mod obstacle;
pub mod ports;
pub mod readings;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod vector;

pub use errors::SimError;
pub use obstacle::Obstacle;
pub use ports::NoiseSource;
pub use readings::{
    BaroData, DeviceKind, FixType, GpsData, ImuData, LidarScan, Reading, VioData,
};
pub use state::{BatteryStatus, BodySnapshot, BodyState, MotorStatus, Rotation};
pub use systems::{Battery, BodyObserver, Motor, NO_HIT, RigidBodyEngine};
pub use vector::Vector3;
