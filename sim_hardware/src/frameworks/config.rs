use std::{env, str::FromStr, time::Duration};

// Runtime constants (not simulation tuning).

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Fixed RNG seed; unset means system entropy.
pub fn sim_seed() -> Option<u64> {
    parsed("SIM_SEED")
}

pub fn tick_hz() -> u32 {
    parsed("SIM_TICK_HZ").filter(|hz| *hz > 0).unwrap_or(50)
}

pub fn run_duration() -> Duration {
    let secs = parsed::<f64>("SIM_DURATION_SECS")
        .filter(|s| s.is_finite() && *s >= 0.0)
        .unwrap_or(10.0);
    Duration::from_secs_f64(secs)
}

pub fn vehicle_mass() -> f64 {
    parsed("SIM_MASS_KG").unwrap_or(1.5)
}

pub fn battery_cells() -> u32 {
    parsed("SIM_BATTERY_CELLS").unwrap_or(4)
}

pub fn battery_capacity_mah() -> f64 {
    parsed("SIM_BATTERY_MAH").unwrap_or(5000.0)
}

pub fn hover_throttle() -> f64 {
    parsed("SIM_HOVER_THROTTLE").unwrap_or(0.7)
}

/// Ticks between telemetry log lines.
pub fn telemetry_every() -> u64 {
    parsed("SIM_TELEMETRY_EVERY").filter(|n| *n > 0).unwrap_or(25)
}

/// Everything the runtime reads from the environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub tick_hz: u32,
    pub duration: Duration,
    pub mass: f64,
    pub cell_count: u32,
    pub capacity_mah: f64,
    pub hover_throttle: f64,
    pub telemetry_every: u64,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self {
            seed: sim_seed(),
            tick_hz: tick_hz(),
            duration: run_duration(),
            mass: vehicle_mass(),
            cell_count: battery_cells(),
            capacity_mah: battery_capacity_mah(),
            hover_throttle: hover_throttle(),
            telemetry_every: telemetry_every(),
        }
    }

    /// Seconds integrated per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_hz.max(1))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.dt())
    }

    /// Number of fixed steps that cover the configured duration.
    pub fn total_ticks(&self) -> u64 {
        (self.duration.as_secs_f64() * f64::from(self.tick_hz.max(1))).round() as u64
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: 50,
            duration: Duration::from_secs(10),
            mass: 1.5,
            cell_count: 4,
            capacity_mah: 5000.0,
            hover_throttle: 0.7,
            telemetry_every: 25,
        }
    }
}
