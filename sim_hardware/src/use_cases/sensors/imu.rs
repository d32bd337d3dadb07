use crate::domain::tuning::ImuTuning;
use crate::domain::{BodyObserver, ImuData, NoiseSource, Vector3};

/// Six-axis IMU over the shared rigid body.
///
/// The body has no attitude state, so the true angular rate is always zero and the
/// gyro reports only its drifting bias plus white noise.
pub struct Imu<N> {
    body: BodyObserver,
    noise: N,
    tuning: ImuTuning,
    gyro_bias: Vector3,
}

impl<N: NoiseSource> Imu<N> {
    pub fn new(body: BodyObserver, noise: N) -> Self {
        Self::with_tuning(body, noise, ImuTuning::default())
    }

    pub fn with_tuning(body: BodyObserver, noise: N, tuning: ImuTuning) -> Self {
        Self {
            body,
            noise,
            tuning,
            gyro_bias: Vector3::ZERO,
        }
    }

    /// Samples the sensor. Advances the gyro bias walk on every call.
    pub fn measure(&mut self) -> ImuData {
        let t = self.tuning;
        let true_accel = self.body.acceleration();

        // A level accelerometer at rest reads +g: it senses the support force, not gravity.
        let acceleration = Vector3::new(
            true_accel.x + self.noise.gaussian(0.0, t.accel_noise_sigma),
            true_accel.y + self.noise.gaussian(0.0, t.accel_noise_sigma),
            true_accel.z + t.gravity + self.noise.gaussian(0.0, t.accel_noise_sigma),
        );

        self.gyro_bias += Vector3::new(
            self.noise.gaussian(0.0, t.bias_walk_sigma),
            self.noise.gaussian(0.0, t.bias_walk_sigma),
            self.noise.gaussian(0.0, t.bias_walk_sigma),
        );

        let true_rate = Vector3::ZERO;
        let gyro = true_rate
            + self.gyro_bias
            + Vector3::new(
                self.noise.gaussian(0.0, t.gyro_noise_sigma),
                self.noise.gaussian(0.0, t.gyro_noise_sigma),
                self.noise.gaussian(0.0, t.gyro_noise_sigma),
            );

        ImuData {
            acceleration,
            gyro,
            temperature: t.operating_temperature + self.noise.uniform() * t.temperature_jitter,
        }
    }

    pub fn gyro_bias(&self) -> Vector3 {
        self.gyro_bias
    }
}
