//! Fractional peak-detect resampler for sub-floor virtual sample rates.

use crate::config::ScopeConfig;
use crate::data::entry::BufferEntry;

/// Collapses windows of raw samples into [`BufferEntry::Downsampled`] points.
///
/// The window length is [`ScopeConfig::target_count`] raw samples and may be
/// fractional. `progress` advances by 1.0 per sample; when it reaches the
/// target the window closes and `target_count` is subtracted (keeping the
/// fractional remainder), so emission stays phase-continuous across batches
/// and arbitrary batch boundaries. With `target_count <= 1` the accumulator
/// is a passthrough and every sample becomes its own [`BufferEntry::Raw`].
#[derive(Debug)]
pub struct Accumulator {
    acc_min: u32,
    acc_max: u32,
    acc_sum: f64,
    acc_count: u32,
    progress: f64,
}

impl Accumulator {
    pub fn new(config: &ScopeConfig) -> Self {
        let mut acc = Self {
            acc_min: 0,
            acc_max: 0,
            acc_sum: 0.0,
            acc_count: 0,
            progress: 0.0,
        };
        acc.reset(config);
        acc
    }

    /// Restore the idle accumulation state.
    ///
    /// Called on successful configuration apply and on reconnect, so the next
    /// batch starts a clean window.
    pub fn reset(&mut self, config: &ScopeConfig) {
        self.acc_min = config.max_adc();
        self.acc_max = 0;
        self.acc_sum = 0.0;
        self.acc_count = 0;
        self.progress = 0.0;
    }

    /// Process one raw batch into history entries.
    ///
    /// A pure state transition: same state and same input give the same
    /// output and the same next state. May return an empty vector when no
    /// window closes within the batch.
    pub fn process(&mut self, config: &ScopeConfig, batch: &[u16]) -> Vec<BufferEntry> {
        // The config may have changed since the previous batch.
        let target_count = config.target_count();

        if target_count <= 1.0 {
            return batch.iter().map(|&v| BufferEntry::Raw(v)).collect();
        }

        let mut out = Vec::with_capacity((batch.len() as f64 / target_count) as usize + 1);
        for &sample in batch {
            let v = sample as u32;
            self.acc_min = self.acc_min.min(v);
            self.acc_max = self.acc_max.max(v);
            self.acc_sum += v as f64;
            self.acc_count += 1;
            self.progress += 1.0;

            if self.progress >= target_count {
                let avg = if self.acc_count > 0 {
                    self.acc_sum / self.acc_count as f64
                } else {
                    v as f64
                };
                out.push(BufferEntry::Downsampled {
                    min: self.acc_min as u16,
                    max: self.acc_max as u16,
                    avg,
                });
                self.acc_min = config.max_adc();
                self.acc_max = 0;
                self.acc_sum = 0.0;
                self.acc_count = 0;
                // Subtracting (not zeroing) keeps the fractional remainder.
                self.progress -= target_count;
            }
        }
        out
    }

    /// Fraction of the current window already filled, `0.0..target_count`.
    pub fn progress(&self) -> f64 {
        self.progress
    }
}
