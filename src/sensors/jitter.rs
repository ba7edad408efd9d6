//! Random sources for the simulated sensors

use std::collections::VecDeque;
use tracing::warn;

/// Source of uniform samples in `[0, 1)`
pub trait Jitter: Send {
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f64, max: f64) -> f64 {
        self.unit() * (max - min) + min
    }
}

/// Samples drawn from the operating system RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsJitter;

impl Jitter for OsJitter {
    fn unit(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        if let Err(e) = getrandom::fill(&mut buf) {
            warn!("OS random source unavailable, using midpoint: {}", e);
            return 0.5;
        }
        // Top 53 bits fill the f64 mantissa exactly.
        (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    samples: VecDeque<f64>,
}

impl ScriptedJitter {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }
}

impl Jitter for ScriptedJitter {
    fn unit(&mut self) -> f64 {
        match self.samples.pop_front() {
            Some(sample) => {
                self.samples.push_back(sample);
                sample
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_jitter_stays_in_unit_interval() {
        let mut jitter = OsJitter;
        for _ in 0..1_000 {
            let sample = jitter.unit();
            assert!((0.0..1.0).contains(&sample), "{}", sample);
        }
    }

    #[test]
    fn scripted_jitter_cycles() {
        let mut jitter = ScriptedJitter::new([0.25, 0.75]);
        assert_eq!(jitter.unit(), 0.25);
        assert_eq!(jitter.unit(), 0.75);
        assert_eq!(jitter.unit(), 0.25);
        assert_eq!(ScriptedJitter::new([]).unit(), 0.0);
    }

    #[test]
    fn range_maps_unit_samples() {
        let mut jitter = ScriptedJitter::new([0.0, 0.5]);
        assert_eq!(jitter.range(-2.0, 3.0), -2.0);
        assert_eq!(jitter.range(-2.0, 3.0), 0.5);
    }
}
