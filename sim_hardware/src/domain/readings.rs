// Typed measurements produced by the simulated hardware.

use super::state::{BatteryStatus, MotorStatus};
use super::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuData {
    /// Specific force in m/s² (reads +g on z when resting level).
    pub acceleration: Vector3,
    /// Angular rate in rad/s.
    pub gyro: Vector3,
    /// Die temperature in °C.
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixType {
    NoFix,
    Fix2d,
    Fix3d,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsData {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // m above the local origin
    pub satellites: u32,
    pub hdop: f64,
    pub fix: FixType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaroData {
    pub pressure: f64,    // hPa
    pub temperature: f64, // °C
    pub altitude: f64,    // m, the altitude the pressure was derived from
}

/// World-space hit points of one planar sweep. Rays without a hit are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LidarScan {
    pub points: Vec<Vector3>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VioData {
    /// Movement since the previous frame, in meters.
    pub delta_position: Vector3,
    pub confidence: f64, // 0.0..=1.0
}

/// Anything a hardware adapter can report from `read`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Imu(ImuData),
    Gps(GpsData),
    Barometer(BaroData),
    Lidar(LidarScan),
    Vio(VioData),
    Motor(MotorStatus),
    Battery(BatteryStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Imu,
    Gps,
    Barometer,
    Lidar,
    Camera,
    Motor,
    Battery,
}

impl DeviceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceKind::Imu => "imu",
            DeviceKind::Gps => "gps",
            DeviceKind::Barometer => "barometer",
            DeviceKind::Lidar => "lidar",
            DeviceKind::Camera => "camera",
            DeviceKind::Motor => "motor",
            DeviceKind::Battery => "battery",
        }
    }
}
