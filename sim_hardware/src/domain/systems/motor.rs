use super::sanitize_dt;
use crate::domain::errors::{SimError, positive};
use crate::domain::state::{MotorStatus, Rotation};
use crate::domain::tuning::MotorTuning;
use crate::domain::vector::Vector3;

/// One rotor. Speed follows the commanded throttle through a first-order lag.
#[derive(Debug, Clone)]
pub struct Motor {
    id: u32,
    position: Vector3, // mount point relative to center of mass
    rotation: Rotation,
    tuning: MotorTuning,

    throttle: f64, // 0.0..=1.0
    current_rpm: f64,
}

impl Motor {
    pub fn new(id: u32, position: Vector3, rotation: Rotation) -> Self {
        Self {
            id,
            position,
            rotation,
            tuning: MotorTuning::default(),
            throttle: 0.0,
            current_rpm: 0.0,
        }
    }

    pub fn with_tuning(
        id: u32,
        position: Vector3,
        rotation: Rotation,
        tuning: MotorTuning,
    ) -> Result<Self, SimError> {
        positive(tuning.max_rpm, SimError::InvalidMaxSpeed)?;
        positive(tuning.spin_up_seconds, SimError::InvalidTimeConstant)?;
        Ok(Self {
            tuning,
            ..Self::new(id, position, rotation)
        })
    }

    /// Commands a throttle fraction; anything outside `0..=1` is clamped, NaN reads as idle.
    pub fn set_throttle(&mut self, percent: f64) {
        self.throttle = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };
    }

    pub fn update(&mut self, dt: f64) {
        let dt = sanitize_dt(dt);
        let target = self.throttle * self.tuning.max_rpm;

        // A step longer than the time constant would overshoot the target.
        let gain = (dt / self.tuning.spin_up_seconds).min(1.0);
        self.current_rpm += (target - self.current_rpm) * gain;
        self.current_rpm = self.current_rpm.max(0.0);
    }

    /// Stops the rotor immediately and drops the throttle command.
    pub fn shutdown(&mut self) {
        self.throttle = 0.0;
        self.current_rpm = 0.0;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn speed_rpm(&self) -> f64 {
        self.current_rpm
    }

    pub fn max_rpm(&self) -> f64 {
        self.tuning.max_rpm
    }

    pub fn status(&self) -> MotorStatus {
        MotorStatus {
            id: self.id,
            rpm: self.current_rpm,
            throttle: self.throttle,
            max_rpm: self.tuning.max_rpm,
        }
    }
}
