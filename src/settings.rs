//! Match settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are accepted.

use std::fmt;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WINNING_SCORE, PLAYER_COUNT};

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings read error: {err}"),
            SettingsError::Parse(err) => write!(f, "settings parse error: {err}"),
            SettingsError::Invalid(message) => write!(f, "invalid settings: {message}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World width
    pub width: f32,
    /// World height
    pub height: f32,
    /// RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Score a front-end treats as a win (0 = endless)
    pub winning_score: u32,

    // === Headless runner ===
    /// Simulated frame length in milliseconds
    pub frame_ms: u64,
    /// Number of frames to simulate
    pub frames: u32,
    /// How many players are AI driven, starting from the left (0-2)
    pub ai_players: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: None,
            winning_score: DEFAULT_WINNING_SCORE,

            frame_ms: 16,
            frames: 1000,
            ai_players: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(SettingsError::Invalid(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.ai_players > PLAYER_COUNT {
            return Err(SettingsError::Invalid(format!(
                "ai_players must be at most {PLAYER_COUNT}, got {}",
                self.ai_players
            )));
        }
        if self.frame_ms == 0 {
            return Err(SettingsError::Invalid("frame_ms must be non-zero".into()));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// The configured seed, or one derived from the clock's sub-second nanos
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| u64::from(d.subsec_nanos()))
                .unwrap_or_default()
        })
    }
}
