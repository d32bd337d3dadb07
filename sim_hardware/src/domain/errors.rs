use std::fmt;

// Domain-level errors for simulation setup. Ticking never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    InvalidMass,
    InvalidCellCount,
    InvalidCapacity,
    InvalidTimeConstant,
    InvalidMaxSpeed,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SimError::InvalidMass => "mass must be finite and positive",
            SimError::InvalidCellCount => "battery needs at least one cell",
            SimError::InvalidCapacity => "battery capacity must be finite and positive",
            SimError::InvalidTimeConstant => "motor spin-up time must be finite and positive",
            SimError::InvalidMaxSpeed => "motor max speed must be finite and positive",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SimError {}

pub(crate) fn positive(value: f64, err: SimError) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}
