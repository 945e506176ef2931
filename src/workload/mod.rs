//! Seeded stream of bin requests for a driver to feed into the engine.

use crate::conf::AConf;

use self::prng::Prng;

pub mod prng;

/// One `bin_alloc` call: which bin, how large, which selector.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Request {
    pub bin: usize,
    pub size: usize,
    pub r: u32,
}

/// Endless iterator of [`Request`]s over `conf.bin_count` bins.
pub struct Workload {
    prng: Prng,
    conf: AConf,
}

impl Workload {
    pub fn new(prng: Prng, conf: AConf) -> anyhow::Result<Self> {
        conf.validate()?;
        Ok(Self{
            prng,
            conf,
        })
    }
    /// replays the same requests from the start
    pub fn new_with_same_seed(&self) -> Self {
        Self{
            prng: self.prng.new_with_same_seed(),
            conf: self.conf.clone(),
        }
    }
}

impl Iterator for Workload {
    type Item = Request;

    fn next(&mut self) -> Option<Request> {
        let bin = self.prng.index(self.conf.bin_count);
        let size = self.prng.size(self.conf.max_size);
        let r = self.prng.selector();
        Some(Request{bin, size, r})
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::conf::{Conf, get_test_config};

    use super::Workload;
    use super::prng::Prng;

    #[test]
    fn test_requests_in_range() {
        let conf = get_test_config();
        let workload = Workload::new(Prng::from_seed([1;32]), conf.clone()).unwrap();
        for req in workload.take(5000) {
            assert!(req.bin < conf.bin_count);
            assert!(req.size <= conf.max_size);
            assert!(req.r >= 1024);
        }
    }

    #[test]
    fn test_replay() {
        let workload = Workload::new(Prng::from_seed([2;32]), get_test_config()).unwrap();
        let replay = workload.new_with_same_seed();
        let a: Vec<_> = workload.take(100).collect();
        let b: Vec<_> = replay.take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_conf() {
        let conf = Arc::new(Conf{bin_count: 0, ..Conf::default()});
        assert!(Workload::new(Prng::from_seed([0;32]), conf).is_err());
    }
}
