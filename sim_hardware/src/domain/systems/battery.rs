use super::{finite_or_zero, sanitize_dt};
use crate::domain::errors::{SimError, positive};
use crate::domain::state::BatteryStatus;
use crate::domain::tuning::BatteryTuning;
use tracing::warn;

const SECONDS_PER_HOUR: f64 = 3600.0;
const MAH_PER_AH: f64 = 1000.0;

/// Battery pack: coulomb counting, a linear discharge curve with I·R sag, and a
/// lumped thermal model.
#[derive(Debug, Clone)]
pub struct Battery {
    cell_count: u32,
    capacity_mah: f64,
    tuning: BatteryTuning,

    remaining_mah: f64,
    voltage: f64,
    current: f64,
    temperature: f64,
}

impl Battery {
    pub fn new(cell_count: u32, capacity_mah: f64) -> Result<Self, SimError> {
        Self::with_tuning(cell_count, capacity_mah, BatteryTuning::default())
    }

    pub fn with_tuning(
        cell_count: u32,
        capacity_mah: f64,
        tuning: BatteryTuning,
    ) -> Result<Self, SimError> {
        if cell_count == 0 {
            return Err(SimError::InvalidCellCount);
        }
        let capacity_mah = positive(capacity_mah, SimError::InvalidCapacity)?;

        // Starts full and at rest.
        Ok(Self {
            cell_count,
            capacity_mah,
            tuning,
            remaining_mah: capacity_mah,
            voltage: f64::from(cell_count) * tuning.max_cell_voltage,
            current: 0.0,
            temperature: tuning.ambient_temperature,
        })
    }

    /// Integrates a constant `load_amps` draw over `dt` seconds.
    pub fn update(&mut self, dt: f64, load_amps: f64) {
        let dt = sanitize_dt(dt);
        let load_amps = finite_or_zero(load_amps);
        let t = self.tuning;
        let was_depleted = self.is_depleted();

        self.current = load_amps;

        let used_mah = load_amps * dt / SECONDS_PER_HOUR * MAH_PER_AH;
        self.remaining_mah = (self.remaining_mah - used_mah).clamp(0.0, self.capacity_mah);

        let charge = self.state_of_charge();
        let cell_voltage =
            t.min_cell_voltage + (t.max_cell_voltage - t.min_cell_voltage) * charge;
        let open_circuit = f64::from(self.cell_count) * cell_voltage;
        self.voltage = open_circuit - self.current * t.internal_resistance;

        let heat_watts = self.current * self.current * t.internal_resistance;
        self.temperature += heat_watts * dt * t.heating_factor;
        // Cooling never carries the pack past ambient in one step.
        let cooled = (dt * t.cooling_rate).min(1.0);
        self.temperature -= (self.temperature - t.ambient_temperature) * cooled;

        if !was_depleted && self.is_depleted() {
            warn!(cells = self.cell_count, voltage = self.voltage, "battery depleted");
        }
    }

    /// Remaining fraction of capacity, `0.0..=1.0`.
    pub fn state_of_charge(&self) -> f64 {
        self.remaining_mah / self.capacity_mah
    }

    pub fn is_depleted(&self) -> bool {
        self.remaining_mah <= 0.0
    }

    /// Voltage of a fully charged pack at rest.
    pub fn full_voltage(&self) -> f64 {
        f64::from(self.cell_count) * self.tuning.max_cell_voltage
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn remaining_mah(&self) -> f64 {
        self.remaining_mah
    }

    pub fn capacity_mah(&self) -> f64 {
        self.capacity_mah
    }

    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn status(&self) -> BatteryStatus {
        BatteryStatus {
            voltage: self.voltage,
            current: self.current,
            capacity_mah: self.capacity_mah,
            remaining_mah: self.remaining_mah,
            cell_count: self.cell_count,
            temperature: self.temperature,
        }
    }
}
