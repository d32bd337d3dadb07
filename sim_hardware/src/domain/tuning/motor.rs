/// Brushless motor response.

#[derive(Debug, Clone, Copy)]
pub struct MotorTuning {
    /// Rotor speed at full throttle, in RPM.
    pub max_rpm: f64,

    /// First-order lag time constant in seconds.
    pub spin_up_seconds: f64,
}

impl Default for MotorTuning {
    fn default() -> Self {
        Self {
            max_rpm: 10_000.0,
            spin_up_seconds: 0.5,
        }
    }
}
