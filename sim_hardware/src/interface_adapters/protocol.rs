// Telemetry DTOs and conversions for readings leaving the simulator.
// Domain types stay serde-free; everything serialized goes through here.

use crate::domain::{
    BaroData, BatteryStatus, FixType, GpsData, ImuData, LidarScan, MotorStatus, Reading, Vector3,
    VioData,
};
use crate::use_cases::TickReport;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Vector3Dto {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3> for Vector3Dto {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// One reading, tagged by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ReadingDto {
    Imu(ImuDto),
    Gps(GpsDto),
    Barometer(BaroDto),
    Lidar(LidarDto),
    Vio(VioDto),
    Motor(MotorDto),
    Battery(BatteryDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct ImuDto {
    pub acceleration: Vector3Dto,
    pub gyro: Vector3Dto,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GpsDto {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub satellites: u32,
    pub hdop: f64,
    pub fix_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaroDto {
    pub pressure: f64,
    pub temperature: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LidarDto {
    pub points: Vec<Vector3Dto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VioDto {
    pub delta_position: Vector3Dto,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MotorDto {
    pub id: u32,
    pub rpm: f64,
    pub throttle: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatteryDto {
    pub voltage: f64,
    pub current: f64,
    pub capacity_mah: f64,
    pub remaining_mah: f64,
    pub cell_count: u32,
    pub temperature: f64,
}

/// Periodic snapshot logged by the runtime.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryFrame {
    pub tick: u64,
    pub position: Vector3Dto,
    pub velocity: Vector3Dto,
    pub thrust: f64,
    pub readings: Vec<ReadingDto>,
}

impl TelemetryFrame {
    pub fn new(report: &TickReport, readings: Vec<Reading>) -> Self {
        Self {
            tick: report.tick,
            position: report.body.position.into(),
            velocity: report.body.velocity.into(),
            thrust: report.thrust.z,
            readings: readings.into_iter().map(ReadingDto::from).collect(),
        }
    }
}

impl From<Reading> for ReadingDto {
    fn from(reading: Reading) -> Self {
        match reading {
            Reading::Imu(d) => ReadingDto::Imu(d.into()),
            Reading::Gps(d) => ReadingDto::Gps(d.into()),
            Reading::Barometer(d) => ReadingDto::Barometer(d.into()),
            Reading::Lidar(d) => ReadingDto::Lidar(d.into()),
            Reading::Vio(d) => ReadingDto::Vio(d.into()),
            Reading::Motor(d) => ReadingDto::Motor(d.into()),
            Reading::Battery(d) => ReadingDto::Battery(d.into()),
        }
    }
}

impl From<ImuData> for ImuDto {
    fn from(d: ImuData) -> Self {
        Self {
            acceleration: d.acceleration.into(),
            gyro: d.gyro.into(),
            temperature: d.temperature,
        }
    }
}

impl From<GpsData> for GpsDto {
    fn from(d: GpsData) -> Self {
        Self {
            latitude: d.latitude,
            longitude: d.longitude,
            altitude: d.altitude,
            satellites: d.satellites,
            hdop: d.hdop,
            fix_type: match d.fix {
                FixType::NoFix => "NO_FIX",
                FixType::Fix2d => "2D_FIX",
                FixType::Fix3d => "3D_FIX",
            },
        }
    }
}

impl From<BaroData> for BaroDto {
    fn from(d: BaroData) -> Self {
        Self {
            pressure: d.pressure,
            temperature: d.temperature,
            altitude: d.altitude,
        }
    }
}

impl From<LidarScan> for LidarDto {
    fn from(d: LidarScan) -> Self {
        Self {
            points: d.points.into_iter().map(Vector3Dto::from).collect(),
        }
    }
}

impl From<VioData> for VioDto {
    fn from(d: VioData) -> Self {
        Self {
            delta_position: d.delta_position.into(),
            confidence: d.confidence,
        }
    }
}

impl From<MotorStatus> for MotorDto {
    fn from(d: MotorStatus) -> Self {
        Self {
            id: d.id,
            rpm: d.rpm,
            throttle: d.throttle,
        }
    }
}

impl From<BatteryStatus> for BatteryDto {
    fn from(d: BatteryStatus) -> Self {
        Self {
            voltage: d.voltage,
            current: d.current,
            capacity_mah: d.capacity_mah,
            remaining_mah: d.remaining_mah,
            cell_count: d.cell_count,
            temperature: d.temperature,
        }
    }
}
