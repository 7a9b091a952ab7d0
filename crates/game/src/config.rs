//! Game configuration (persona, tuning, timing, audio). Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use audio::CueSettings;
use physics::{Persona, UnknownPersona};

/// Errors that can occur when loading or checking configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// A value parsed but makes no sense.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error(transparent)]
    UnknownPersona(#[from] UnknownPersona),
}

/// Startup settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Pilot persona: "optimizer" or "prototyper".
    #[serde(default = "default_persona")]
    pub persona: String,
    /// Seed for course layout, wind and sensor noise.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Simulated frames per second for the headless run.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    /// Stop the headless run after this many frames.
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
    /// Drag slider value applied after persona selection.
    #[serde(default)]
    pub drag: Option<f32>,
    /// Tilt-gain slider value applied after persona selection.
    #[serde(default)]
    pub tilt_gain: Option<f32>,
    #[serde(default)]
    pub timing: MissionTiming,
    #[serde(default)]
    pub audio: AudioConfig,
}

fn default_persona() -> String {
    Persona::Optimizer.name().to_string()
}
fn default_seed() -> u64 {
    0x5eed
}
fn default_frame_rate() -> f32 {
    60.0
}
fn default_max_frames() -> u64 {
    60 * 60 * 10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            seed: default_seed(),
            frame_rate: default_frame_rate(),
            max_frames: default_max_frames(),
            drag: None,
            tilt_gain: None,
            timing: MissionTiming::default(),
            audio: AudioConfig::default(),
        }
    }
}

/// Mission clock settings, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MissionTiming {
    /// Time allowed to escape the maze before a forced retry.
    pub mission2_time_limit: f32,
    /// Pause between finishing mission 1 or 2 and starting the next one.
    pub advance_delay: f32,
    /// Pause between finishing mission 3 and the end screen.
    pub end_game_delay: f32,
}

impl Default for MissionTiming {
    fn default() -> Self {
        Self {
            mission2_time_limit: 60.0,
            advance_delay: 3.0,
            end_game_delay: 2.0,
        }
    }
}

/// Negative and NaN values read as zero, values too large for a `Duration`
/// saturate. `validate()` rejects both before they get here.
fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::MAX)
}

/// `value` as a `Duration`, or why it cannot be one.
fn exact_seconds(value: f32) -> Result<Duration, String> {
    Duration::try_from_secs_f32(value).map_err(|e| format!("{} is not a valid duration ({})", value, e))
}

impl MissionTiming {
    pub fn mission2_time_limit(&self) -> Duration {
        seconds(self.mission2_time_limit)
    }

    pub fn advance_delay(&self) -> Duration {
        seconds(self.advance_delay)
    }

    pub fn end_game_delay(&self) -> Duration {
        seconds(self.end_game_delay)
    }
}

/// Audio settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Master volume, 0.0 to 1.0.
    pub volume: f64,
    pub pass_sound: Option<PathBuf>,
    pub impact_sound: Option<PathBuf>,
    pub complete_sound: Option<PathBuf>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.15,
            pass_sound: None,
            impact_sound: None,
            complete_sound: None,
        }
    }
}

impl AudioConfig {
    pub fn cue_settings(&self) -> CueSettings {
        CueSettings {
            enabled: self.enabled,
            volume: self.volume,
            pass: self.pass_sound.clone(),
            impact: self.impact_sound.clone(),
            complete: self.complete_sound.clone(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_ron_str(&data)
    }

    /// Parse and validate config from RON text.
    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured persona.
    pub fn persona(&self) -> Result<Persona, ConfigError> {
        Ok(self.persona.parse()?)
    }

    /// Seconds per simulated frame.
    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.persona()?;
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(invalid("frame_rate", format!("must be positive, got {}", self.frame_rate)));
        }
        let t = &self.timing;
        let limit = exact_seconds(t.mission2_time_limit).map_err(|e| invalid("timing.mission2_time_limit", e))?;
        if limit.is_zero() {
            return Err(invalid(
                "timing.mission2_time_limit",
                format!("must be positive, got {}", t.mission2_time_limit),
            ));
        }
        for (field, value) in [
            ("timing.advance_delay", t.advance_delay),
            ("timing.end_game_delay", t.end_game_delay),
        ] {
            exact_seconds(value).map_err(|e| invalid(field, e))?;
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(invalid("audio.volume", format!("must be within 0..=1, got {}", self.audio.volume)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
