//! Stored configuration: save and load the scope settings as a JSON blob.
//!
//! The on-disk object keeps the key spelling of the original web client
//! (`desiredRate` camel-cased, the rest snake_case), so blobs written by
//! either side stay interchangeable. [`StoredConfig`] is the serializable
//! mirror of [`ScopeConfig`]; missing fields in an old blob fall back to the
//! defaults rather than failing the load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ScopeConfig, MAX_BIT_WIDTH};
use crate::error::ScopeError;

// ---------- Serializable mirror type ----------

/// Serializable version of [`ScopeConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredConfig {
    #[serde(rename = "desiredRate")]
    pub desired_rate: u32,
    pub sample_rate: u32,
    pub atten: u8,
    pub bit_width: u8,
    pub test_hz: u32,
    pub trigger: u16,
    pub invert: bool,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self::from(&ScopeConfig::default())
    }
}

impl From<&ScopeConfig> for StoredConfig {
    fn from(c: &ScopeConfig) -> Self {
        Self {
            desired_rate: c.desired_rate,
            sample_rate: c.sample_rate,
            atten: c.atten,
            bit_width: c.bit_width,
            test_hz: c.test_hz,
            trigger: c.trigger,
            invert: c.invert,
        }
    }
}

impl From<StoredConfig> for ScopeConfig {
    fn from(s: StoredConfig) -> Self {
        Self {
            desired_rate: s.desired_rate,
            sample_rate: s.sample_rate,
            atten: s.atten,
            bit_width: s.bit_width,
            test_hz: s.test_hz,
            trigger: s.trigger,
            invert: s.invert,
        }
    }
}

// ---------- JSON round-trip ----------

pub fn config_to_json(config: &ScopeConfig) -> Result<String, ScopeError> {
    Ok(serde_json::to_string_pretty(&StoredConfig::from(config))?)
}

pub fn config_from_json(json: &str) -> Result<ScopeConfig, ScopeError> {
    let stored: StoredConfig = serde_json::from_str(json)?;
    if stored.bit_width == 0 || stored.bit_width > MAX_BIT_WIDTH {
        return Err(ScopeError::InvalidConfig(format!(
            "bit_width {} outside 1..={MAX_BIT_WIDTH}",
            stored.bit_width
        )));
    }
    Ok(stored.into())
}

// ---------- File IO ----------

/// Write the config blob to `path`, pretty-printed.
pub fn save_config_to_path(config: &ScopeConfig, path: &Path) -> Result<(), ScopeError> {
    let txt = config_to_json(config)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Read the config blob from `path`. A missing file is `Ok(None)`; a file
/// that exists but does not parse, or that holds an out-of-range conversion
/// width, is an error the caller logs before falling back to defaults.
pub fn load_config_from_path(path: &Path) -> Result<Option<ScopeConfig>, ScopeError> {
    let txt = match std::fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(config_from_json(&txt)?))
}

/// Remove the stored blob. Already-missing is not an error.
pub fn clear_config_at_path(path: &Path) -> Result<(), ScopeError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_every_field() {
        let cfg = ScopeConfig {
            desired_rate: 500,
            sample_rate: 1000,
            atten: 1,
            bit_width: 11,
            test_hz: 440,
            trigger: 777,
            invert: true,
        };
        let json = config_to_json(&cfg).unwrap();
        assert_eq!(config_from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn on_disk_keys_keep_the_original_spelling() {
        let json = config_to_json(&ScopeConfig::default()).unwrap();
        assert!(json.contains("\"desiredRate\""));
        assert!(json.contains("\"sample_rate\""));
        assert!(json.contains("\"test_hz\""));
        assert!(!json.contains("desired_rate"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = config_from_json(r#"{ "desiredRate": 250, "trigger": 100 }"#).unwrap();
        assert_eq!(cfg.desired_rate, 250);
        assert_eq!(cfg.trigger, 100);
        assert_eq!(cfg.atten, 3);
        assert_eq!(cfg.bit_width, 12);
        assert!(!cfg.invert);
    }

    #[test]
    fn garbage_blob_is_a_corrupt_config_error() {
        let err = config_from_json("not json at all").unwrap_err();
        assert!(matches!(err, ScopeError::CorruptConfig(_)));
    }

    #[test]
    fn out_of_range_bit_width_fails_the_load() {
        let err = config_from_json(r#"{ "bit_width": 200 }"#).unwrap_err();
        assert!(matches!(err, ScopeError::InvalidConfig(_)));

        let err = config_from_json(r#"{ "bit_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ScopeError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let cfg = config_from_json(r#"{ "desiredRate": 2000, "someday": true }"#).unwrap();
        assert_eq!(cfg.desired_rate, 2000);
    }
}
