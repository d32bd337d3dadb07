use std::f64::consts::PI;

// Port for the randomness every measurement model draws from.
//
// Implementors only supply `uniform`; the shaped samples are derived from it so a
// scripted source in tests drives every model the same way the real one does.
pub trait NoiseSource: Send {
    /// Uniform sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform sample in `[-span / 2, span / 2)`.
    fn centered(&mut self, span: f64) -> f64 {
        (self.uniform() - 0.5) * span
    }

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.uniform() * (hi - lo)
    }

    /// Integer in `[lo, hi)`. Returns `lo` for an empty range.
    fn int_range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = hi - lo;
        lo + ((self.uniform() * f64::from(span)) as u32).min(span - 1)
    }

    /// Gaussian sample via the Box-Muller transform.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // `1 - u` keeps the log argument in (0, 1].
        let u1 = 1.0 - self.uniform();
        let u2 = self.uniform();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z0 * std_dev + mean
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedNoise;
    use super::*;

    #[test]
    fn when_sample_is_midpoint_then_centered_is_zero() {
        let mut noise = ScriptedNoise::quiet();
        assert_eq!(noise.centered(0.1), 0.0);
    }

    #[test]
    fn when_box_muller_angle_is_quarter_turn_then_gaussian_is_mean() {
        // u1 = 1 - 0.5, u2 = 0.25 -> cos(pi / 2) = 0.
        let mut noise = ScriptedNoise::new(vec![0.5, 0.25]);
        assert!((noise.gaussian(3.0, 2.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn when_uniform_is_zero_then_gaussian_stays_finite() {
        let mut noise = ScriptedNoise::new(vec![0.0]);
        assert!(noise.gaussian(0.0, 1.0).is_finite());
    }

    #[test]
    fn when_uniform_approaches_one_then_int_range_stays_below_upper_bound() {
        let mut noise = ScriptedNoise::new(vec![0.999_999_999]);
        assert_eq!(noise.int_range(8, 12), 11);
    }

    #[test]
    fn when_int_range_is_empty_then_returns_lower_bound() {
        let mut noise = ScriptedNoise::new(vec![0.7]);
        assert_eq!(noise.int_range(5, 5), 5);
    }
}
