//! Application Configuration
//!
//! Startup settings for the tank: simulation constants and window options,
//! loadable from a JSON file so the feel can be tweaked without touching
//! code. Missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{WaterSurface, WaveIntegrator};
use crate::world::SurfaceExtent;

/// Simulation parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimSettings {
    /// Grid resolution (cells per side).
    pub resolution: usize,
    /// Wave propagation speed in world units per second.
    pub wave_speed: f32,
    /// Exponential velocity damping rate per second.
    pub damping: f32,
    /// Half the side length of the tank in world units.
    pub half_size: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            resolution: 100,
            wave_speed: 1.2,
            damping: 0.5,
            half_size: 3.0,
        }
    }
}

impl SimSettings {
    /// Build a resting water surface from these settings.
    pub fn build_surface(&self) -> WaterSurface {
        WaterSurface::with_params(
            self.resolution,
            SurfaceExtent::new(self.half_size),
            WaveIntegrator {
                wave_speed: self.wave_speed,
                damping: self.damping,
            },
        )
    }
}

/// Window options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimSettings,
    pub window: WindowSettings,
}

/// Errors from loading or validating a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    /// A field value the simulation cannot run with.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl AppConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when it does not
    /// exist. Malformed or invalid files are still errors.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check field values the simulation cannot tolerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sim.resolution < 3 {
            return Err(ConfigError::Invalid(format!(
                "sim.resolution must be at least 3, got {}",
                self.sim.resolution
            )));
        }
        if !(self.sim.wave_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.wave_speed must be positive, got {}",
                self.sim.wave_speed
            )));
        }
        if !(self.sim.damping >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.damping must be non-negative, got {}",
                self.sim.damping
            )));
        }
        if !(self.sim.half_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.half_size must be positive, got {}",
                self.sim.half_size
            )));
        }
        Ok(())
    }
}
