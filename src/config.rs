//! Seek bar configuration: defaults, optional JSON file, environment overrides

use crate::constants::*;
use crate::utils::{Result, SeekBarError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location: `<config dir>/vseekbar/config.json`
static DEFAULT_CONFIG_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    pub sample_interval_ms: u64,
    pub sampling_enabled: bool,
    pub initial_progress: f32,
    pub keyboard_step: f32,
    pub thumb_size: f32,
    pub arc_radius: f32,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MILLIS,
            sampling_enabled: true,
            initial_progress: PROGRESS_MIN,
            keyboard_step: KEYBOARD_PROGRESS_STEP,
            thumb_size: THUMB_SIZE,
            arc_radius: ARC_RADIUS,
        }
    }
}

impl SeekBarConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    /// Resolve the config the app should run with.
    ///
    /// Defaults, then the JSON file (`VSEEKBAR_CONFIG` or the default path),
    /// then environment overrides. A broken file is logged and skipped.
    pub fn load() -> Self {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .or_else(|| DEFAULT_CONFIG_PATH.clone());

        let mut config = match path {
            Some(path) => match Self::from_file(&path) {
                Ok(Some(config)) => {
                    log::info!("[Config] Loaded {}", path.display());
                    config
                }
                Ok(None) => {
                    log::debug!("[Config] No config at {}, using defaults", path.display());
                    Self::default()
                }
                Err(e) => {
                    log::warn!("[Config] {}, using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[Config] {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SeekBarError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SeekBarError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Apply `VSEEKBAR_*` overrides. Unparseable values are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SAMPLE_INTERVAL_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.sample_interval_ms = ms,
                Err(_) => log::warn!("[Config] Ignoring {}={:?}", ENV_SAMPLE_INTERVAL_MS, raw),
            }
        }
        if let Some(raw) = lookup(ENV_SAMPLING) {
            match parse_flag(&raw) {
                Some(flag) => self.sampling_enabled = flag,
                None => log::warn!("[Config] Ignoring {}={:?}", ENV_SAMPLING, raw),
            }
        }
    }

    /// Reject values the widget cannot run with; clamp the ones it can fix
    pub fn validate(&mut self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(SeekBarError::InvalidValue {
                field: "sample_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(self.thumb_size.is_finite() && self.thumb_size > 0.0) {
            return Err(SeekBarError::InvalidValue {
                field: "thumb_size",
                reason: format!("{} is not a positive size", self.thumb_size),
            });
        }
        if !(self.arc_radius.is_finite() && self.arc_radius > 0.0) {
            return Err(SeekBarError::InvalidValue {
                field: "arc_radius",
                reason: format!("{} is not a positive radius", self.arc_radius),
            });
        }
        self.initial_progress = if self.initial_progress.is_nan() {
            PROGRESS_MIN
        } else {
            self.initial_progress.clamp(PROGRESS_MIN, PROGRESS_MAX)
        };
        if !(self.keyboard_step.is_finite() && self.keyboard_step > 0.0) {
            self.keyboard_step = KEYBOARD_PROGRESS_STEP;
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
