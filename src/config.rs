//! User settings stored as a small TOML document.
//!
//! ```toml
//! instrument = "guitar"
//! tuning = "drop-d"      # preset name or notes, e.g. "DADGBE"
//! capo = 2
//! frets = 12
//! orientation = "horizontal"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagram::Orientation;
use crate::error::TheoryError;
use crate::instrument::Instrument;
use crate::presets;
use crate::tuning::Tuning;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("serializing settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown setting '{0}' (expected instrument, tuning, capo, frets or orientation)")]
    UnknownKey(String),
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error(transparent)]
    Theory(#[from] TheoryError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

const KEYS: [&str; 5] = ["instrument", "tuning", "capo", "frets", "orientation"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub instrument: String,
    /// Preset tuning name, or notes in any form the tuning parser accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning: Option<String>,
    pub capo: i32,
    /// Replaces every string's fret count when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frets: Option<u32>,
    pub orientation: Orientation,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instrument: "guitar".to_string(),
            tuning: None,
            capo: 0,
            frets: None,
            orientation: Orientation::Vertical,
        }
    }
}

/// `<config dir>/clifret/settings.toml`
pub fn default_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("clifret").join("settings.toml"))
}

impl Settings {
    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved settings to {}", path.display());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "instrument" => self.instrument.clone(),
            "tuning" => self.tuning.clone().unwrap_or_default(),
            "capo" => self.capo.to_string(),
            "frets" => self.frets.map(|f| f.to_string()).unwrap_or_default(),
            "orientation" => self.orientation.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Set one key from text. An empty value clears `tuning` and `frets`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };
        match key {
            "instrument" => {
                presets::instrument(value)?;
                self.instrument = value.to_ascii_lowercase();
            }
            "tuning" => {
                self.tuning = (!value.is_empty()).then(|| value.to_string());
            }
            "capo" => {
                let capo: i32 = value.parse().map_err(|e| invalid(format!("{}", e)))?;
                if capo < 0 {
                    return Err(TheoryError::InvalidCapoPosition(capo).into());
                }
                self.capo = capo;
            }
            "frets" => {
                self.frets = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|e| invalid(format!("{}", e)))?)
                };
            }
            "orientation" => {
                self.orientation = value.parse().map_err(invalid)?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Every key with its current value, in a fixed order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }

    /// Turn these settings into a ready-to-render instrument: preset lookup,
    /// tuning, fret override, then capo.
    pub fn resolve(&self) -> Result<Instrument> {
        let mut instrument = presets::instrument(&self.instrument)?;
        debug!("resolved instrument '{}'", instrument);

        if let Some(tuning) = &self.tuning {
            let tuning = resolve_tuning(tuning)?;
            instrument = tuning.apply_to(&instrument)?;
            debug!("applied tuning '{}'", tuning);
        }

        if let Some(frets) = self.frets {
            debug!("overriding fret count with {}", frets);
            instrument = instrument.with_frets(frets);
        }

        Ok(instrument.with_capo(self.capo)?)
    }
}

/// A preset tuning name, or else notes to parse.
fn resolve_tuning(text: &str) -> Result<Tuning> {
    match presets::tuning(text) {
        Ok(tuning) => Ok(tuning),
        Err(TheoryError::UnknownTuning(_)) => {
            let custom = Tuning::parse(text.trim(), text).map_err(|e| {
                debug!("'{}' is not a tuning: {}", text, e);
                TheoryError::UnknownTuning(text.to_string())
            })?;
            Ok(custom)
        }
        Err(e) => Err(e.into()),
    }
}
