use anyhow::{Context, Result};
use aquadose_core::{history, premium};
use aquadose_schemas::units::{CalculatorKind, VolumeUnit};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "aquadose.yaml";

/// A one-tap tank size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankPreset {
    pub label: String,
    pub gallons: f64,
}

/// Settings read from `aquadose.yaml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where history and premium state are kept.
    pub data_dir: PathBuf,
    pub max_history_items: usize,
    pub premium_unlock_hours: u32,
    pub default_volume_unit: VolumeUnit,
    pub tank_presets: Vec<TankPreset>,
    pub enabled_calculators: Vec<CalculatorKind>,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let tank_presets = [10.0, 20.0, 29.0, 40.0, 55.0, 75.0]
            .into_iter()
            .map(|gallons| TankPreset {
                label: format!("{}g", gallons),
                gallons,
            })
            .collect();

        Self {
            data_dir: PathBuf::from("data"),
            max_history_items: history::DEFAULT_MAX_ITEMS,
            premium_unlock_hours: premium::DEFAULT_UNLOCK_HOURS,
            default_volume_unit: VolumeUnit::Gallons,
            tank_presets,
            enabled_calculators: CalculatorKind::ALL.to_vec(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`. When no path is given the default file is
    /// used if present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        debug!(?path, "loaded configuration");
        Ok(config)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    pub fn premium_path(&self) -> PathBuf {
        self.data_dir.join("premium.json")
    }

    pub fn preset(&self, label: &str) -> Option<&TankPreset> {
        self.tank_presets
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
    }

    pub fn is_enabled(&self, kind: CalculatorKind) -> bool {
        self.enabled_calculators.contains(&kind)
    }
}
