//! Frontend settings.
//!
//! Read from an optional JSON file; every field falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Topology, DEFAULT_FIELD_SIZE};
use crate::error::{LifeError, Result};

pub const DEFAULT_PERIOD: f32 = 0.5;
pub const MIN_PERIOD: f32 = 0.05;
pub const MAX_PERIOD: f32 = 1.0;
/// Amount the slower/faster controls change the period by
pub const PERIOD_STEP: f32 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of the square field; signed so bad values reach rule validation
    pub field_size: i64,
    /// Neighbor counts that bring a dead cell to life
    pub birth: Vec<i64>,
    /// Neighbor counts that keep a live cell alive
    pub survive: Vec<i64>,
    pub topology: Topology,
    /// Seconds between automatic steps
    pub period: f32,
    /// File used by the load and save controls
    pub state_path: PathBuf,
    /// Live fraction used by the randomize control
    pub randomize_density: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE as i64,
            birth: vec![3],
            survive: vec![2, 3],
            topology: Topology::Toroidal,
            period: DEFAULT_PERIOD,
            state_path: PathBuf::from("state.txt"),
            randomize_density: 0.3,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|err| {
            LifeError::InvalidConfig(format!("settings file {}: {err}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"field_size": 12, "topology": "bounded"}"#).unwrap();
        assert_eq!(settings.field_size, 12);
        assert_eq!(settings.topology, Topology::Bounded);
        assert_eq!(settings.birth, vec![3]);
        assert_eq!(settings.survive, vec![2, 3]);
        assert_eq!(settings.state_path, PathBuf::from("state.txt"));
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"field_size": "big"}"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));
        assert!(err.to_string().contains("settings file"));
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
