use crate::domain::tuning::VioTuning;
use crate::domain::{BodyObserver, NoiseSource, Vector3, VioData};

/// Downward camera running visual-inertial odometry: reports motion between frames.
pub struct VioCamera<N> {
    body: BodyObserver,
    noise: N,
    tuning: VioTuning,
    last_position: Vector3,
}

impl<N: NoiseSource> VioCamera<N> {
    pub fn new(body: BodyObserver, noise: N) -> Self {
        Self::with_tuning(body, noise, VioTuning::default())
    }

    /// The first frame is measured against the body position at construction.
    pub fn with_tuning(body: BodyObserver, noise: N, tuning: VioTuning) -> Self {
        let last_position = body.position();
        Self {
            body,
            noise,
            tuning,
            last_position,
        }
    }

    pub fn measure(&mut self) -> VioData {
        let t = self.tuning;
        let current = self.body.position();
        let delta = current - self.last_position;
        self.last_position = current;

        // Optical flow error is horizontal only; height comes from the rangefinder.
        VioData {
            delta_position: Vector3::new(
                delta.x + self.noise.centered(t.flow_noise),
                delta.y + self.noise.centered(t.flow_noise),
                delta.z,
            ),
            confidence: self.noise.range(t.min_confidence, t.max_confidence),
        }
    }
}
