use crate::domain::tuning::GpsTuning;
use crate::domain::{BodyObserver, FixType, GpsData, NoiseSource, Vector3};

/// GNSS receiver projecting the local ENU frame onto latitude/longitude.
pub struct Gps<N> {
    body: BodyObserver,
    noise: N,
    tuning: GpsTuning,
    drift: Vector3,
}

impl<N: NoiseSource> Gps<N> {
    pub fn new(body: BodyObserver, noise: N) -> Self {
        Self::with_tuning(body, noise, GpsTuning::default())
    }

    pub fn with_tuning(body: BodyObserver, noise: N, tuning: GpsTuning) -> Self {
        Self {
            body,
            noise,
            tuning,
            drift: Vector3::ZERO,
        }
    }

    /// Produces a fix. The position drift random-walks on every call.
    pub fn measure(&mut self) -> GpsData {
        let t = self.tuning;
        let local = self.body.position();

        self.drift += Vector3::new(
            self.noise.centered(t.drift_step),
            self.noise.centered(t.drift_step),
            self.noise.centered(t.drift_step * t.vertical_drift_factor),
        );

        let east = local.x + self.drift.x;
        let north = local.y + self.drift.y;
        let (latitude, longitude) = self.to_geodetic(east, north);

        GpsData {
            latitude,
            longitude,
            altitude: local.z + self.drift.z,
            satellites: self.noise.int_range(t.min_satellites, t.max_satellites),
            hdop: self.noise.range(t.min_hdop, t.max_hdop),
            fix: FixType::Fix3d,
        }
    }

    /// Flat-earth projection around the configured origin.
    pub fn to_geodetic(&self, east: f64, north: f64) -> (f64, f64) {
        let t = self.tuning;
        let meters_per_degree_lon = t.meters_per_degree_lat * t.origin_lat.to_radians().cos();
        (
            t.origin_lat + north / t.meters_per_degree_lat,
            t.origin_lon + east / meters_per_degree_lon,
        )
    }

    pub fn drift(&self) -> Vector3 {
        self.drift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RigidBodyEngine;
    use crate::domain::ports::test_support::ScriptedNoise;
    use crate::interface_adapters::utils::rng::SimRng;

    #[test]
    fn when_at_origin_without_drift_then_fix_is_origin() {
        let engine = RigidBodyEngine::new(1.0).expect("valid mass");
        let mut gps = Gps::new(engine.observer(), ScriptedNoise::quiet());

        let fix = gps.measure();
        assert!((fix.latitude - 37.7749).abs() < 1e-12);
        assert!((fix.longitude + 122.4194).abs() < 1e-12);
        assert_eq!(fix.altitude, 0.0);
        assert_eq!(fix.fix, FixType::Fix3d);
    }

    #[test]
    fn when_body_moves_north_and_east_then_coordinates_follow_flat_earth() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        // Grounded, so only the horizontal push moves the body: 1 s at 1 m/s².
        engine.update(1.0, Vector3::new(1.0, 1.0, 0.0));
        let p = engine.position();
        let mut gps = Gps::new(engine.observer(), ScriptedNoise::quiet());

        let fix = gps.measure();
        let lon_scale = 111_320.0 * 37.7749f64.to_radians().cos();
        assert!((fix.latitude - (37.7749 + p.y / 111_320.0)).abs() < 1e-12);
        assert!((fix.longitude - (-122.4194 + p.x / lon_scale)).abs() < 1e-12);
    }

    #[test]
    fn when_read_repeatedly_then_quality_metrics_stay_in_range() {
        let engine = RigidBodyEngine::new(1.0).expect("valid mass");
        let mut gps = Gps::new(engine.observer(), SimRng::seeded(3));

        for _ in 0..200 {
            let fix = gps.measure();
            assert!((8..12).contains(&fix.satellites));
            assert!(fix.hdop >= 1.0 && fix.hdop < 1.5);
        }
    }

    #[test]
    fn when_read_repeatedly_then_drift_accumulates_and_vertical_grows_slower() {
        let engine = RigidBodyEngine::new(1.0).expect("valid mass");
        // Every draw at the top of the range: each step adds the maximum offset.
        let mut gps = Gps::new(engine.observer(), ScriptedNoise::new(vec![1.0]));

        let first = gps.measure();
        let d = gps.drift();
        assert!((d.x - 0.25).abs() < 1e-12);
        assert!((d.y - 0.25).abs() < 1e-12);
        assert!((d.z - 0.05).abs() < 1e-12);

        // Static body, second read: the walk keeps going.
        let second = gps.measure();
        let d = gps.drift();
        assert!((d.x - 0.5).abs() < 1e-12);
        assert!((d.y - 0.5).abs() < 1e-12);
        assert!((d.z - 0.1).abs() < 1e-12);
        assert_ne!(first.latitude, second.latitude);
        assert!(second.altitude > first.altitude);
    }
}
