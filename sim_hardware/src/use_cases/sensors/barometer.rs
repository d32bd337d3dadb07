use crate::domain::tuning::BaroTuning;
use crate::domain::{BaroData, BodyObserver, NoiseSource};

pub struct Barometer<N> {
    body: BodyObserver,
    noise: N,
    tuning: BaroTuning,
}

impl<N: NoiseSource> Barometer<N> {
    pub fn new(body: BodyObserver, noise: N) -> Self {
        Self::with_tuning(body, noise, BaroTuning::default())
    }

    pub fn with_tuning(body: BodyObserver, noise: N, tuning: BaroTuning) -> Self {
        Self { body, noise, tuning }
    }

    pub fn measure(&mut self) -> BaroData {
        let t = self.tuning;
        let altitude = self.body.position().z;

        BaroData {
            pressure: self.pressure_at(altitude) + self.noise.centered(t.pressure_noise),
            temperature: t.base_temperature + self.noise.uniform() * t.temperature_jitter,
            altitude,
        }
    }

    /// Noise-free static pressure in hPa at `altitude` meters.
    pub fn pressure_at(&self, altitude: f64) -> f64 {
        let t = self.tuning;
        // Clamped base keeps the power law real far above the model's valid range.
        let base = (1.0 - t.lapse * altitude).max(0.0);
        t.sea_level_pressure * base.powf(t.exponent)
    }
}
