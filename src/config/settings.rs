use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::CalculationMethod;

/// Used whenever no location has ever been recorded (Dhaka).
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    latitude: 23.777176,
    longitude: 90.399452,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

fn default_method_key() -> String {
    CalculationMethod::MuslimWorldLeague.key().to_string()
}
fn default_true() -> bool {
    true
}

/// Persisted user preferences, shared by every surface that renders prayer
/// times. This module is the single owner of the storage keys; writers and
/// readers agree by construction.
///
/// Every field resolves to a documented default when absent. A missing
/// settings file is the normal first-launch state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSettings {
    #[serde(default = "default_method_key")]
    pub calculation_method: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_true")]
    pub use_location: bool,
    #[serde(default)]
    pub last_known_location: Option<Coordinates>,
}

impl Default for PrayerSettings {
    fn default() -> Self {
        Self {
            calculation_method: default_method_key(),
            city: String::new(),
            use_location: true,
            last_known_location: None,
        }
    }
}

impl PrayerSettings {
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "salahtimes")
            .context("Could not determine project directories")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::config_path()?))
    }

    /// Resolve settings from a specific file. Absent file or unparseable
    /// content yields defaults; malformed data is never an error here.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {:?}: {}; using defaults", path, e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Malformed settings in {:?}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing settings")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// The stored method key resolved to a preset; unknown or stale keys
    /// fall back to Muslim World League.
    pub fn method(&self) -> CalculationMethod {
        CalculationMethod::from_key(&self.calculation_method)
    }

    /// Last known coordinates, or the fixed fallback point when no
    /// location was ever recorded.
    pub fn coordinates(&self) -> Coordinates {
        self.last_known_location.unwrap_or(FALLBACK_COORDINATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_resolves_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PrayerSettings::load_from(&dir.path().join("config.toml"));

        assert_eq!(settings.method(), CalculationMethod::MuslimWorldLeague);
        assert_eq!(settings.city, "");
        assert!(settings.use_location);
        assert_eq!(settings.coordinates(), FALLBACK_COORDINATES);
    }

    #[test]
    fn partial_file_resolves_missing_fields_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "calculation_method = \"karachi\"\n").unwrap();

        let settings = PrayerSettings::load_from(&path);
        assert_eq!(settings.method(), CalculationMethod::Karachi);
        assert_eq!(settings.city, "");
        assert!(settings.use_location);
        assert!(settings.last_known_location.is_none());
    }

    #[test]
    fn malformed_file_resolves_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "city = [not toml").unwrap();

        assert_eq!(PrayerSettings::load_from(&path), PrayerSettings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = PrayerSettings::default();
        settings.calculation_method = CalculationMethod::UmmAlQura.key().to_string();
        settings.city = "Makkah".to_string();
        settings.use_location = false;
        settings.last_known_location = Some(Coordinates::new(21.422510, 39.826168));
        settings.save_to(&path).unwrap();

        let loaded = PrayerSettings::load_from(&path);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.method(), CalculationMethod::UmmAlQura);
        assert_eq!(loaded.coordinates(), Coordinates::new(21.422510, 39.826168));
    }

    #[test]
    fn stale_method_key_falls_back_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "calculation_method = \"france18\"\n").unwrap();

        let settings = PrayerSettings::load_from(&path);
        assert_eq!(settings.method(), CalculationMethod::MuslimWorldLeague);
    }
}
