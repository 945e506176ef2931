use std::fs::File;
use std::io::Read;

use rand_hc::Hc128Rng;
use rand_core::{RngCore, SeedableRng};

use crate::engine::SELECTOR_RANGE;

pub type Seed = <Hc128Rng as SeedableRng>::Seed;

pub fn get_random_seed() -> anyhow::Result<Seed> {
    let mut dest = [0;32];
    let mut dev_random = File::open("/dev/urandom")?;
    dev_random.read_exact(&mut dest)?;
    Ok(dest)
}

pub struct Prng {
    rng: Hc128Rng,
    pub seed: Seed,
}

impl Prng {
    /// use [`get_random_seed`] to generated seed
    pub fn from_seed(seed: Seed) -> Self {
        Self{
            rng: Hc128Rng::from_seed(seed),
            seed,
        }
    }
    pub fn new_with_same_seed(&self) -> Self {
        Self::from_seed(self.seed)
    }
    /// strategy selector, always `>= 1024` with uniform low bits
    pub fn selector(&mut self) -> u32 {
        self.rng.next_u32() | SELECTOR_RANGE
    }
    /// uniform in `0..=max`
    pub fn size(&mut self, max: usize) -> usize {
        match (max as u64).checked_add(1) {
            Some(n) => (self.rng.next_u64() % n) as usize,
            None => self.rng.next_u64() as usize,
        }
    }
    /// uniform in `0..n`, `n` must not be zero
    pub fn index(&mut self, n: usize) -> usize {
        assert_ne!(n,0);
        (self.rng.next_u64() % (n as u64)) as usize
    }
}
