use esp_hal::rng::Rng;
use panel_core::random::RandomSource;

pub(crate) fn get_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Hardware random number generator
pub struct HardwareRng {
    rng: Rng,
}

impl HardwareRng {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl Default for HardwareRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}
