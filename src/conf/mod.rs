use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, ensure};
use serde_derive::*;

/// For large allocation sizes the copy inside realloc dwarfs everything else.
pub const REALLOC_MAX: usize = 2000;

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Conf {
    /// verification level, 0 disables pattern fill/check and zero check
    pub test_level: u32,
    /// resize strategy is only eligible while the bin is smaller than this
    pub realloc_max: usize,
    /// number of bins a workload spreads its requests over
    pub bin_count: usize,
    /// largest size a workload requests
    pub max_size: usize,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            test_level: 0,
            realloc_max: REALLOC_MAX,
            bin_count: 1000,
            max_size: 10000,
        }
    }
}

impl Conf {
    pub fn verify(&self) -> bool {
        self.test_level > 0
    }
    pub fn validate(&self) -> Result<()> {
        ensure!(self.bin_count != 0,"bin_count must not be zero");
        Ok(())
    }
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let conf: Conf = serde_json::from_slice(data)?;
        conf.validate()?;
        Ok(conf)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_json(&data)
    }
}

pub type AConf = Arc<Conf>;

pub fn get_test_config() -> AConf {
    Arc::new(Conf{
        test_level: 1,
        realloc_max: REALLOC_MAX,
        bin_count: 64,
        max_size: 8192,
    })
}
