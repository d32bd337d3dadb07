// Reference scheduler for one simulated quadcopter: motors, pack and sensor suite
// around a single rigid body.

use super::sensors::{Barometer, Gps, Imu, Lidar, VioCamera};
use super::types::{TickReport, VehicleSetup};
use crate::domain::tuning::VehicleTuning;
use crate::domain::{
    Battery, BodyObserver, Motor, Obstacle, Reading, RigidBodyEngine, Rotation, SimError, Vector3,
};
use crate::interface_adapters::utils::rng::SimRng;
use tracing::debug;

pub struct QuadVehicle {
    engine: RigidBodyEngine,
    motors: [Motor; 4],
    battery: Battery,
    tuning: VehicleTuning,

    imu: Imu<SimRng>,
    gps: Gps<SimRng>,
    barometer: Barometer<SimRng>,
    lidar: Lidar,
    camera: VioCamera<SimRng>,

    tick: u64,
}

impl QuadVehicle {
    /// Builds the airframe. Every noisy sensor gets its own stream forked from `rng`.
    pub fn new(setup: VehicleSetup, rng: &mut SimRng) -> Result<Self, SimError> {
        let mut engine = RigidBodyEngine::with_tuning(setup.mass, setup.physics)?;
        for obstacle in setup.obstacles {
            engine.add_obstacle(obstacle);
        }

        let battery = Battery::with_tuning(setup.cell_count, setup.capacity_mah, setup.battery)?;
        let motors = x_layout(setup.tuning.arm_length)
            .map(|(id, position, rotation)| Motor::with_tuning(id, position, rotation, setup.motor));
        let [m0, m1, m2, m3] = motors;
        let motors = [m0?, m1?, m2?, m3?];

        let body = engine.observer();
        Ok(Self {
            imu: Imu::new(body.clone(), rng.fork()),
            gps: Gps::new(body.clone(), rng.fork()),
            barometer: Barometer::new(body.clone(), rng.fork()),
            lidar: Lidar::new(body.clone()),
            camera: VioCamera::new(body, rng.fork()),
            engine,
            motors,
            battery,
            tuning: setup.tuning,
            tick: 0,
        })
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.engine.add_obstacle(obstacle);
    }

    pub fn set_throttle_all(&mut self, percent: f64) {
        for m in &mut self.motors {
            m.set_throttle(percent);
        }
    }

    /// One simulation step: motors, then the body, then the pack.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        for m in &mut self.motors {
            m.update(dt);
        }

        let thrust = Vector3::new(0.0, 0.0, self.total_thrust());
        self.engine.update(dt, thrust);

        let current = self.total_current();
        self.battery.update(dt, current);

        self.tick += 1;
        debug!(tick = self.tick, thrust = thrust.z, current, "vehicle tick");

        TickReport {
            tick: self.tick,
            body: self.engine.state(),
            thrust,
            battery: self.battery.status(),
        }
    }

    /// Thrust along +z in newtons; each rotor contributes in proportion to RPM².
    pub fn total_thrust(&self) -> f64 {
        self.motors
            .iter()
            .map(|m| {
                let ratio = m.speed_rpm() / m.max_rpm();
                ratio * ratio * self.tuning.max_thrust_per_motor
            })
            .sum()
    }

    /// Pack load in amps for the current throttle commands.
    pub fn total_current(&self) -> f64 {
        self.tuning.idle_current
            + self
                .motors
                .iter()
                .map(|m| m.throttle() * self.tuning.max_current_per_motor)
                .sum::<f64>()
    }

    /// Reads every sensor once, in a fixed order.
    pub fn sample(&mut self) -> Vec<Reading> {
        vec![
            Reading::Imu(self.imu.measure()),
            Reading::Gps(self.gps.measure()),
            Reading::Barometer(self.barometer.measure()),
            Reading::Lidar(self.lidar.measure()),
            Reading::Vio(self.camera.measure()),
            Reading::Battery(self.battery.status()),
        ]
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn engine(&self) -> &RigidBodyEngine {
        &self.engine
    }

    pub fn observer(&self) -> BodyObserver {
        self.engine.observer()
    }

    pub fn motors(&self) -> &[Motor] {
        &self.motors
    }

    pub fn motors_mut(&mut self) -> &mut [Motor] {
        &mut self.motors
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }
}

/// Motor ids, mount points and spin directions for an X quad; diagonals share direction.
fn x_layout(arm: f64) -> [(u32, Vector3, Rotation); 4] {
    let d = arm / std::f64::consts::SQRT_2;
    [
        (0, Vector3::new(d, d, 0.0), Rotation::Ccw),
        (1, Vector3::new(-d, -d, 0.0), Rotation::Ccw),
        (2, Vector3::new(d, -d, 0.0), Rotation::Cw),
        (3, Vector3::new(-d, d, 0.0), Rotation::Cw),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(seed: u64) -> QuadVehicle {
        QuadVehicle::new(VehicleSetup::default(), &mut SimRng::seeded(seed)).expect("valid setup")
    }

    #[test]
    fn when_motors_idle_then_vehicle_stays_on_ground() {
        let mut v = vehicle(1);
        for _ in 0..50 {
            let report = v.tick(0.02);
            assert_eq!(report.body.position.z, 0.0);
        }
        assert_eq!(v.tick_count(), 50);
    }

    #[test]
    fn when_throttle_above_hover_then_vehicle_climbs() {
        let mut v = vehicle(1);
        v.set_throttle_all(0.8);
        for _ in 0..100 {
            v.tick(0.02);
        }
        assert!(v.engine().position().z > 0.5);
    }

    #[test]
    fn when_flying_then_battery_drains_with_throttle() {
        let mut v = vehicle(1);
        v.set_throttle_all(0.5);
        let report = v.tick(1.0);
        // 0.5 A idle + 4 * 0.5 * 15 A.
        assert!((report.battery.current - 30.5).abs() < 1e-9);
        assert!(report.battery.remaining_mah < 5000.0);
    }

    #[test]
    fn when_motors_spin_equally_then_thrust_is_four_times_one_rotor() {
        let mut v = vehicle(1);
        v.set_throttle_all(1.0);
        v.tick(5.0);
        assert!((v.total_thrust() - 32.0).abs() < 1e-9);
    }

    #[test]
    fn when_sampled_then_every_sensor_reports_once() {
        let mut v = vehicle(1);
        let readings = v.sample();
        assert_eq!(readings.len(), 6);
        assert!(matches!(readings[0], Reading::Imu(_)));
        assert!(matches!(readings[3], Reading::Lidar(_)));
    }

    #[test]
    fn when_seeds_match_then_runs_are_identical() {
        let mut a = vehicle(77);
        let mut b = vehicle(77);
        for v in [&mut a, &mut b] {
            v.set_throttle_all(0.75);
        }
        for _ in 0..20 {
            assert_eq!(a.tick(0.02), b.tick(0.02));
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn when_layout_is_built_then_diagonal_motors_share_rotation() {
        let v = vehicle(1);
        let m = v.motors();
        assert_eq!(m[0].rotation(), m[1].rotation());
        assert_eq!(m[2].rotation(), m[3].rotation());
        assert_ne!(m[0].rotation(), m[2].rotation());
        for motor in m {
            assert!((motor.position().length() - 0.25).abs() < 1e-12);
        }
    }
}
