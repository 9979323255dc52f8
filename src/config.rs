use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_ANIMATION_SPEED;
use crate::error::{Result, TaquinError};
use crate::shuffle::DEFAULT_SHUFFLE_MOVES;

/// User-tunable settings, read from a TOML file. Every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Random-walk steps per shuffle.
    pub shuffle_moves: u32,
    /// Animation progress added per frame, out of 100.
    pub animation_speed: u8,
    /// Rows kept free around the board.
    pub margin: u16,
    /// Directory holding optional tile and screen art.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffle_moves: DEFAULT_SHUFFLE_MOVES,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            margin: 2,
            assets_dir: None,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let settings = Self::from_toml_str(&contents)?;
                log::info!("loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(TaquinError::io(path, e)),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| TaquinError::io(path, e))?;
        log::info!("wrote settings to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.animation_speed) {
            return Err(TaquinError::InvalidSetting(format!(
                "animation_speed must be within 1..=100, got {}",
                self.animation_speed
            )));
        }
        Ok(())
    }
}
