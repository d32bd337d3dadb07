use crate::domain::NoiseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default [`NoiseSource`]: OS entropy in production, an explicit seed when runs must
/// be reproducible.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: StdRng,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Derives an independent generator; forks of equally seeded parents match.
    pub fn fork(&mut self) -> Self {
        Self::seeded(self.rng.random())
    }
}

impl NoiseSource for SimRng {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
