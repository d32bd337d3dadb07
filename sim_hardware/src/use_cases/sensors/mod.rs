// Measurement models: each reads the shared body and layers its own noise on top.

pub mod barometer;
pub mod camera;
pub mod gps;
pub mod imu;
pub mod lidar;

pub use barometer::Barometer;
pub use camera::VioCamera;
pub use gps::Gps;
pub use imu::Imu;
pub use lidar::Lidar;
