/// Quad airframe constants used by the reference tick.

#[derive(Debug, Clone, Copy)]
pub struct VehicleTuning {
    /// Thrust of one motor at max RPM, in newtons. Thrust scales with RPM².
    pub max_thrust_per_motor: f64,

    /// Current one motor draws at full throttle, in amps.
    pub max_current_per_motor: f64,

    /// Avionics draw with motors stopped, in amps.
    pub idle_current: f64,

    /// Distance from the center of mass to each motor, in meters.
    pub arm_length: f64,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            max_thrust_per_motor: 8.0,
            max_current_per_motor: 15.0,
            idle_current: 0.5,
            arm_length: 0.25,
        }
    }
}
