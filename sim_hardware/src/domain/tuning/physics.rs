/// Rigid-body integration constants.

#[derive(Debug, Clone, Copy)]
pub struct PhysicsTuning {
    /// Downward gravitational acceleration in m/s².
    pub gravity: f64,

    /// Quadratic drag coefficient; drag force is `coefficient * |v|²` in newtons.
    pub drag_coefficient: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            drag_coefficient: 0.1,
        }
    }
}
