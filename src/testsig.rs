//! Square-wave test source, matching the device's self-test output.

use crate::config::ScopeConfig;

/// Phase-continuous square wave at `test_hz`, 50% duty, sampled at the
/// hardware rate, swinging over the full ADC range.
///
/// Stands in for the device when exercising the pipeline in demos and tests.
#[derive(Debug)]
pub struct TestSignal {
    /// Cycles advanced per sample.
    step: f64,
    /// Current phase in cycles, wrapped to `[0, 1)`.
    phase: f64,
    high: u16,
}

impl TestSignal {
    pub fn new(config: &ScopeConfig) -> Self {
        let step = if config.sample_rate > 0 {
            config.test_hz as f64 / config.sample_rate as f64
        } else {
            0.0
        };
        Self {
            step,
            phase: 0.0,
            high: (config.max_adc() - 1) as u16,
        }
    }

    /// Produce the next `n` samples.
    pub fn next_batch(&mut self, n: usize) -> Vec<u16> {
        let mut batch = Vec::with_capacity(n);
        for _ in 0..n {
            let v = if self.phase < 0.5 { self.high } else { 0 };
            batch.push(v);
            self.phase = (self.phase + self.step).fract();
        }
        batch
    }
}
