/// Lithium-polymer pack electrical and thermal model.

#[derive(Debug, Clone, Copy)]
pub struct BatteryTuning {
    /// Full-charge cell voltage in volts.
    pub max_cell_voltage: f64,

    /// Cutoff cell voltage in volts.
    pub min_cell_voltage: f64,

    /// Pack internal resistance in ohms.
    pub internal_resistance: f64,

    /// Degrees gained per joule of I²R heating.
    pub heating_factor: f64,

    /// Fraction of the temperature gap to ambient closed per second.
    pub cooling_rate: f64,

    /// Ambient temperature in °C; also the starting temperature.
    pub ambient_temperature: f64,
}

impl Default for BatteryTuning {
    fn default() -> Self {
        Self {
            max_cell_voltage: 4.2,
            min_cell_voltage: 3.0,
            internal_resistance: 0.05,
            heating_factor: 0.01,
            cooling_rate: 0.05,
            ambient_temperature: 25.0,
        }
    }
}
