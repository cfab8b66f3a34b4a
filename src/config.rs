//! Acquisition and display configuration shared across the scope pipeline.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Attenuation table
// ─────────────────────────────────────────────────────────────────────────────

/// Full-scale input voltage per ADC attenuation setting (index 0..=3).
///
/// Out-of-range indices fall back to the highest range (3.3 V).
pub const ATTEN_FULL_SCALE_VOLTS: [f64; 4] = [0.95, 1.25, 1.75, 3.3];

/// Minimum acquisition rate the hardware supports, in samples per second.
///
/// Desired rates below this floor are realized virtually: the hardware runs at
/// the floor and the [`Accumulator`](crate::data::Accumulator) peak-detects
/// each group of `hardware_rate / desired_rate` samples down to one point.
pub const HARDWARE_RATE_FLOOR: u32 = 1000;

/// Widest ADC conversion the `u16` sample domain can represent. Stored blobs
/// with a larger `bit_width` fail validation; [`ScopeConfig::max_adc`] clamps
/// to this bound so the derived quantities stay total either way.
pub const MAX_BIT_WIDTH: u8 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// ScopeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// The single source of truth for acquisition and trigger settings.
///
/// Owned by the [`ScopeSession`](crate::ScopeSession); mutated only when a
/// configuration apply succeeds (`ScopeCommand::ConfigApplied`), never edited
/// in place by UI widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeConfig {
    /// Rate the user asked for, in samples per second. May be below the
    /// hardware floor, in which case peak-detect downsampling kicks in.
    pub desired_rate: u32,
    /// Rate the hardware actually runs at (pinned to [`HARDWARE_RATE_FLOOR`]).
    pub sample_rate: u32,
    /// ADC attenuation setting, index into [`ATTEN_FULL_SCALE_VOLTS`].
    pub atten: u8,
    /// ADC conversion width in bits (nominally 12).
    pub bit_width: u8,
    /// Frequency of the device's square-wave test output, in Hz.
    pub test_hz: u32,
    /// Trigger level in raw slider units, `0..max_adc`.
    pub trigger: u16,
    /// Trigger edge polarity. See
    /// [`locate_trigger`](crate::data::locate_trigger) for the exact edge
    /// predicates.
    pub invert: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            desired_rate: 10_000,
            sample_rate: 10_000,
            atten: 3,
            bit_width: 12,
            test_hz: 100,
            trigger: 2048,
            invert: false,
        }
    }
}

impl ScopeConfig {
    /// Number of raw hardware samples represented by one displayed point.
    ///
    /// Recomputed from the current config on every batch, because the config
    /// may change between batches. `1.0` means passthrough (no downsampling);
    /// values above 1 may be fractional.
    ///
    /// ```
    /// # use adcscope::ScopeConfig;
    /// let mut cfg = ScopeConfig::default();
    /// assert_eq!(cfg.target_count(), 1.0);
    /// cfg.desired_rate = 400;
    /// cfg.sample_rate = 1000;
    /// assert_eq!(cfg.target_count(), 2.5);
    /// ```
    pub fn target_count(&self) -> f64 {
        if self.desired_rate >= HARDWARE_RATE_FLOOR {
            1.0
        } else {
            (self.sample_rate as f64 / self.desired_rate as f64).max(1.0)
        }
    }

    /// Wall-clock duration of one displayed point, in milliseconds.
    ///
    /// In peak-detect mode each point spans one accumulation window; above the
    /// hardware floor each point is a single sample at the desired rate.
    pub fn ms_per_point(&self) -> f64 {
        if self.desired_rate < HARDWARE_RATE_FLOOR {
            self.target_count()
        } else {
            1000.0 / self.desired_rate as f64
        }
    }

    /// Exclusive upper bound of the raw sample domain, `2^bit_width`.
    ///
    /// `bit_width` is clamped to [`MAX_BIT_WIDTH`] so an out-of-range value
    /// (from a peer or a stored blob) cannot overflow the shift.
    pub fn max_adc(&self) -> u32 {
        1u32 << u32::from(self.bit_width.min(MAX_BIT_WIDTH))
    }

    /// Full-scale input voltage for the current attenuation setting.
    pub fn max_voltage(&self) -> f64 {
        ATTEN_FULL_SCALE_VOLTS
            .get(self.atten as usize)
            .copied()
            .unwrap_or(3.3)
    }

    /// Trigger threshold in raw display units.
    ///
    /// The slider's value space runs opposite to the raw axis (the screen Y
    /// axis is inverted), so the threshold is mirrored around full scale.
    pub fn trigger_threshold(&self) -> f64 {
        self.max_adc() as f64 - self.trigger as f64
    }

    /// Hardware rate to request for the current desired rate.
    pub fn pinned_hardware_rate(&self) -> u32 {
        self.desired_rate.max(HARDWARE_RATE_FLOOR)
    }

    /// Build the configuration-apply payload sent to the device.
    ///
    /// Only hardware-relevant fields go over the wire; `desired_rate`,
    /// `trigger` and `invert` are client-side state.
    pub fn params_request(&self) -> ParamsRequest {
        ParamsRequest {
            sample_rate: self.pinned_hardware_rate(),
            bit_width: self.bit_width,
            atten: self.atten,
            test_hz: self.test_hz,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ParamsRequest
// ─────────────────────────────────────────────────────────────────────────────

/// JSON body of a configuration-apply request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsRequest {
    pub sample_rate: u32,
    pub bit_width: u8,
    pub atten: u8,
    pub test_hz: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_count_is_unity_at_or_above_the_floor() {
        let mut cfg = ScopeConfig::default();
        for rate in [1000, 2000, 10_000, 80_000] {
            cfg.desired_rate = rate;
            cfg.sample_rate = rate;
            assert_eq!(cfg.target_count(), 1.0, "rate {rate} should pass through");
        }
    }

    #[test]
    fn target_count_is_fractional_below_the_floor() {
        let cfg = ScopeConfig {
            desired_rate: 400,
            sample_rate: 1000,
            ..Default::default()
        };
        assert_eq!(cfg.target_count(), 2.5);
        assert_eq!(cfg.ms_per_point(), 2.5);
    }

    #[test]
    fn params_request_pins_the_hardware_rate() {
        let cfg = ScopeConfig {
            desired_rate: 250,
            ..Default::default()
        };
        let req = cfg.params_request();
        assert_eq!(req.sample_rate, 1000);
        assert_eq!(req.bit_width, 12);
        assert_eq!(req.atten, 3);
    }

    #[test]
    fn out_of_range_attenuation_falls_back_to_full_scale() {
        let cfg = ScopeConfig {
            atten: 7,
            ..Default::default()
        };
        assert_eq!(cfg.max_voltage(), 3.3);
    }

    #[test]
    fn trigger_threshold_mirrors_the_slider() {
        let cfg = ScopeConfig::default();
        assert_eq!(cfg.max_adc(), 4096);
        assert_eq!(cfg.trigger_threshold(), 2048.0);
    }

    #[test]
    fn oversized_bit_width_clamps_instead_of_overflowing() {
        let cfg = ScopeConfig {
            bit_width: 200,
            ..Default::default()
        };
        assert_eq!(cfg.max_adc(), 65_536);
        assert_eq!(cfg.trigger_threshold(), 63_488.0);
    }
}
