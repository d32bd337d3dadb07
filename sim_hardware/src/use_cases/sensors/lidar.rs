use crate::domain::tuning::LidarTuning;
use crate::domain::{BodyObserver, LidarScan, Vector3};
use std::f64::consts::TAU;

/// Planar scanning lidar. Deterministic: it only reads the body and obstacle registry.
pub struct Lidar {
    body: BodyObserver,
    tuning: LidarTuning,
    directions: Vec<Vector3>,
}

impl Lidar {
    pub fn new(body: BodyObserver) -> Self {
        Self::with_tuning(body, LidarTuning::default())
    }

    pub fn with_tuning(body: BodyObserver, tuning: LidarTuning) -> Self {
        Self {
            body,
            tuning,
            directions: planar_fan(tuning.rays),
        }
    }

    /// One sweep. Rays that hit nothing within range are left out of the scan.
    pub fn measure(&self) -> LidarScan {
        let origin = self.body.position();
        let points = self
            .directions
            .iter()
            .filter_map(|&dir| {
                let dist = self.body.cast_ray(origin, dir, self.tuning.max_range)?;
                (dist > 0.0).then(|| origin + dir * dist)
            })
            .collect();
        LidarScan { points }
    }

    pub fn directions(&self) -> &[Vector3] {
        &self.directions
    }
}

/// Unit rays evenly spaced around +z, starting along +x.
fn planar_fan(rays: usize) -> Vec<Vector3> {
    (0..rays)
        .map(|i| {
            let angle = TAU * i as f64 / rays as f64;
            Vector3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Obstacle, RigidBodyEngine};

    #[test]
    fn when_world_is_empty_then_scan_has_no_points() {
        let engine = RigidBodyEngine::new(1.0).expect("valid mass");
        let lidar = Lidar::new(engine.observer());
        assert!(lidar.measure().points.is_empty());
    }

    #[test]
    fn when_wall_is_ahead_then_forward_ray_hits_its_face() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        engine.add_obstacle(Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0));
        let lidar = Lidar::new(engine.observer());

        let scan = lidar.measure();
        let hit = scan
            .points
            .iter()
            .find(|p| p.x > 9.0 && p.x < 10.0 && p.y.abs() < 1.0)
            .expect("expected forward hit");
        assert!((hit.x - 9.5).abs() < 1e-9);
        assert!(hit.y.abs() < 1e-9);
    }

    #[test]
    fn when_wall_is_ahead_then_only_forward_facing_rays_hit() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        engine.add_obstacle(Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0));
        let lidar = Lidar::new(engine.observer());

        // Forward ray plus the two 45° rays that reach x = 9.5 at |y| = 9.5.
        let scan = lidar.measure();
        assert_eq!(scan.points.len(), 3);
        assert!(scan.points.iter().all(|p| (p.x - 9.5).abs() < 1e-9));
    }

    #[test]
    fn when_fan_has_eight_rays_then_they_are_unit_and_planar() {
        let engine = RigidBodyEngine::new(1.0).expect("valid mass");
        let lidar = Lidar::new(engine.observer());

        assert_eq!(lidar.directions().len(), 8);
        for d in lidar.directions() {
            assert!((d.length() - 1.0).abs() < 1e-12);
            assert_eq!(d.z, 0.0);
        }
    }

    #[test]
    fn when_body_moves_then_hit_points_stay_in_world_space() {
        let mut engine = RigidBodyEngine::new(1.0).expect("valid mass");
        engine.add_obstacle(Obstacle::new(9.5, 10.5, -10.0, 10.0, -10.0, 10.0));
        // Slide 2 m along +x on the ground.
        engine.update(1.0, Vector3::new(2.0, 0.0, 0.0));
        let lidar = Lidar::new(engine.observer());

        let scan = lidar.measure();
        assert!(scan.points.iter().any(|p| (p.x - 9.5).abs() < 1e-9 && p.y.abs() < 1e-9));
    }
}
