//! Startup settings, read from a JSON file. Every field is optional.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerTuning;
use crate::error::{Error, Result};
use crate::render::scene::RenderMode;

pub const CONFIG_ENV: &str = "GRIDCASTER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "gridcaster.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
    pub target_fps: u32,
    /// Radians of turn per pixel of horizontal mouse motion.
    pub mouse_sensitivity: f32,
    pub player: PlayerTuning,
    pub start_mode: RenderMode,
    /// When false the mesh pipeline is never compiled.
    pub mesh_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: "gridcaster".to_string(),
            target_fps: 60,
            mouse_sensitivity: 0.003,
            player: PlayerTuning::default(),
            start_mode: RenderMode::Analytic,
            mesh_enabled: true,
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(Error::ConfigRead { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.as_ref().display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
