use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSettings {
    /// Directory the per-run gesture CSV files are created in.
    pub output_dir: PathBuf,
    /// Rate of the simulated accelerometer feed.
    pub feed_sample_rate_hz: u32,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("gesture-logs"),
            feed_sample_rate_hz: 100,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<CaptureSettings>,
}

impl SettingsStore {
    /// Loads settings from `path`, falling back to (and persisting)
    /// defaults when the file is missing or unparsable.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            let defaults = CaptureSettings::default();
            let serialized = serde_json::to_string_pretty(&defaults)?;
            fs::write(&path, serialized)
                .with_context(|| format!("Failed to write settings to {}", path.display()))?;
            defaults
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn capture(&self) -> CaptureSettings {
        self.data.read().unwrap().clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
