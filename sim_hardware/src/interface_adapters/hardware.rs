// Hardware-adapter contract. Simulated parts answer through the same async surface a
// real driver would, so flight code cannot tell them apart.

use crate::domain::{
    BaroData, Battery, DeviceKind, GpsData, ImuData, LidarScan, Motor, NoiseSource, Reading,
    VioData,
};
use crate::use_cases::sensors::{Barometer, Gps, Imu, Lidar, VioCamera};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
pub trait HardwareAdapter: Send {
    fn kind(&self) -> DeviceKind;

    fn id(&self) -> String {
        format!("{}_0", self.kind().as_str())
    }

    /// Idempotent setup. Simulated parts have nothing to open.
    async fn init(&mut self) {
        info!(device = %self.id(), "initialized");
    }

    async fn read(&mut self) -> Reading;

    /// Raw command channel. Read-only parts accept and drop the payload.
    async fn write(&mut self, payload: &[u8]) {
        debug!(device = %self.id(), bytes = payload.len(), "write ignored");
    }

    async fn dispose(&mut self) {}
}

#[async_trait]
pub trait Sensor: HardwareAdapter {
    type Measurement: Send;

    async fn read_data(&mut self) -> Self::Measurement;
}

#[async_trait]
pub trait Actuator: HardwareAdapter {
    /// Throttle fraction; clamped to `0..=1`.
    async fn set_throttle(&mut self, percent: f64);

    /// Rotor speed in RPM.
    async fn speed_rpm(&self) -> f64;
}

#[async_trait]
impl<N: NoiseSource> HardwareAdapter for Imu<N> {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Imu
    }

    async fn read(&mut self) -> Reading {
        Reading::Imu(self.read_data().await)
    }
}

#[async_trait]
impl<N: NoiseSource> Sensor for Imu<N> {
    type Measurement = ImuData;

    async fn read_data(&mut self) -> ImuData {
        self.measure()
    }
}

#[async_trait]
impl<N: NoiseSource> HardwareAdapter for Gps<N> {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Gps
    }

    async fn read(&mut self) -> Reading {
        Reading::Gps(self.read_data().await)
    }
}

#[async_trait]
impl<N: NoiseSource> Sensor for Gps<N> {
    type Measurement = GpsData;

    async fn read_data(&mut self) -> GpsData {
        self.measure()
    }
}

#[async_trait]
impl<N: NoiseSource> HardwareAdapter for Barometer<N> {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Barometer
    }

    async fn read(&mut self) -> Reading {
        Reading::Barometer(self.read_data().await)
    }
}

#[async_trait]
impl<N: NoiseSource> Sensor for Barometer<N> {
    type Measurement = BaroData;

    async fn read_data(&mut self) -> BaroData {
        self.measure()
    }
}

#[async_trait]
impl HardwareAdapter for Lidar {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Lidar
    }

    async fn read(&mut self) -> Reading {
        Reading::Lidar(self.read_data().await)
    }
}

#[async_trait]
impl Sensor for Lidar {
    type Measurement = LidarScan;

    async fn read_data(&mut self) -> LidarScan {
        let scan = self.measure();
        debug!(points = scan.points.len(), "lidar sweep");
        scan
    }
}

#[async_trait]
impl<N: NoiseSource> HardwareAdapter for VioCamera<N> {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Camera
    }

    async fn read(&mut self) -> Reading {
        Reading::Vio(self.read_data().await)
    }
}

#[async_trait]
impl<N: NoiseSource> Sensor for VioCamera<N> {
    type Measurement = VioData;

    async fn read_data(&mut self) -> VioData {
        self.measure()
    }
}

#[async_trait]
impl HardwareAdapter for Motor {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Motor
    }

    fn id(&self) -> String {
        format!("motor_{}", Motor::id(self))
    }

    async fn read(&mut self) -> Reading {
        Reading::Motor(self.status())
    }

    async fn dispose(&mut self) {
        self.shutdown();
        info!(device = %HardwareAdapter::id(self), "shutdown");
    }
}

#[async_trait]
impl Actuator for Motor {
    async fn set_throttle(&mut self, percent: f64) {
        Motor::set_throttle(self, percent);
    }

    async fn speed_rpm(&self) -> f64 {
        Motor::speed_rpm(self)
    }
}

#[async_trait]
impl HardwareAdapter for Battery {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Battery
    }

    async fn init(&mut self) {
        info!(
            cells = self.cell_count(),
            capacity_mah = self.capacity_mah(),
            "battery initialized"
        );
    }

    async fn read(&mut self) -> Reading {
        Reading::Battery(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Obstacle, RigidBodyEngine, Rotation, Vector3};
    use crate::interface_adapters::utils::rng::SimRng;

    #[tokio::test]
    async fn when_sensor_is_read_then_variant_matches_kind() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        engine.add_obstacle(Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0));

        let mut adapters: Vec<Box<dyn HardwareAdapter>> = vec![
            Box::new(Imu::new(engine.observer(), SimRng::seeded(1))),
            Box::new(Gps::new(engine.observer(), SimRng::seeded(2))),
            Box::new(Barometer::new(engine.observer(), SimRng::seeded(3))),
            Box::new(Lidar::new(engine.observer())),
            Box::new(VioCamera::new(engine.observer(), SimRng::seeded(4))),
            Box::new(Motor::new(0, Vector3::ZERO, Rotation::Cw)),
            Box::new(Battery::new(4, 5000.0).expect("valid pack")),
        ];

        for adapter in adapters.iter_mut() {
            adapter.init().await;
            let reading = adapter.read().await;
            let matches = match (adapter.kind(), &reading) {
                (DeviceKind::Imu, Reading::Imu(_))
                | (DeviceKind::Gps, Reading::Gps(_))
                | (DeviceKind::Barometer, Reading::Barometer(_))
                | (DeviceKind::Lidar, Reading::Lidar(_))
                | (DeviceKind::Camera, Reading::Vio(_))
                | (DeviceKind::Motor, Reading::Motor(_))
                | (DeviceKind::Battery, Reading::Battery(_)) => true,
                _ => false,
            };
            assert!(matches, "{} returned {reading:?}", adapter.id());
            adapter.write(&[0xde, 0xad]).await;
            adapter.dispose().await;
        }
    }

    #[tokio::test]
    async fn when_lidar_read_through_adapter_then_scan_matches_direct_measure() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        engine.add_obstacle(Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0));
        let mut lidar = Lidar::new(engine.observer());

        let direct = lidar.measure();
        assert_eq!(lidar.read_data().await, direct);
        assert_eq!(lidar.read().await, Reading::Lidar(direct));
    }

    #[tokio::test]
    async fn when_motor_commanded_through_actuator_then_throttle_is_clamped() {
        let mut motor = Motor::new(3, Vector3::ZERO, Rotation::Ccw);
        Actuator::set_throttle(&mut motor, 2.0).await;
        motor.update(5.0);

        assert_eq!(Actuator::speed_rpm(&motor).await, 10_000.0);
        assert_eq!(HardwareAdapter::id(&motor), "motor_3");
        match motor.read().await {
            Reading::Motor(status) => assert_eq!(status.throttle, 1.0),
            other => panic!("unexpected reading {other:?}"),
        }
    }

    #[tokio::test]
    async fn when_motor_disposed_then_rotor_stops() {
        let mut motor = Motor::new(0, Vector3::ZERO, Rotation::Cw);
        Actuator::set_throttle(&mut motor, 1.0).await;
        motor.update(1.0);

        motor.dispose().await;
        assert_eq!(Actuator::speed_rpm(&motor).await, 0.0);
    }

    #[tokio::test]
    async fn when_battery_written_then_state_is_unchanged() {
        let mut battery = Battery::new(4, 5000.0).expect("valid pack");
        let before = battery.status();
        battery.write(b"discharge").await;
        assert_eq!(battery.read().await, Reading::Battery(before));
    }
}
