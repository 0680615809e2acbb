//! Wheel settings
//!
//! Persisted as JSON next to the driver; every field falls back to its
//! default when missing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SegmentSet;

/// Exercises on the default wheel face, in segment order
pub const DEFAULT_SEGMENTS: [&str; 6] = [
    "Push-Ups",
    "Bench Press",
    "Incline Press",
    "Dumbbell Flys",
    "Chest Dips",
    "Cable Crossovers",
];

/// How a spin decides where it stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LandingMode {
    /// Fixed deceleration rate; the random target rotation is cosmetic
    #[default]
    Decelerate,
    /// Deceleration is derived per spin so the wheel travels the random target
    Target,
}

impl LandingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandingMode::Decelerate => "Decelerate",
            LandingMode::Target => "Target",
        }
    }

    /// Deceleration (degrees/s²) for a spin starting at `speed` with a random `target`
    pub fn deceleration(&self, speed: f32, fixed_rate: f32, target: f32) -> f32 {
        match self {
            LandingMode::Decelerate => fixed_rate,
            // v² = 2·a·s
            LandingMode::Target => speed * speed / (2.0 * target),
        }
    }
}

impl fmt::Display for LandingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandingMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decelerate" | "decel" => Ok(LandingMode::Decelerate),
            "target" => Ok(LandingMode::Target),
            _ => Err(SettingsError::UnknownLandingMode(s.to_string())),
        }
    }
}

/// Settings failure
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown landing mode {0:?} (expected decelerate or target)")]
    UnknownLandingMode(String),
}

/// Wheel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Spin ===
    /// Initial angular velocity (degrees/s)
    pub spin_speed: f32,
    /// Linear deceleration (degrees/s²), used in `LandingMode::Decelerate`
    pub deceleration_rate: f32,
    /// Stopping rule
    pub landing: LandingMode,

    // === Timer ===
    /// Countdown length (seconds)
    pub timer_duration: f32,

    // === Wheel face ===
    /// Segment labels, in order
    pub segments: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spin_speed: SPIN_SPEED,
            deceleration_rate: DECELERATION_RATE,
            landing: LandingMode::Decelerate,

            timer_duration: TIMER_DURATION,

            segments: DEFAULT_SEGMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Replace unusable numbers and labels with defaults
    pub fn validated(mut self) -> Self {
        fn positive_or(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Invalid {} ({}), using {}", name, value, fallback);
                fallback
            }
        }

        self.spin_speed = positive_or(self.spin_speed, SPIN_SPEED, "spin_speed");
        self.deceleration_rate =
            positive_or(self.deceleration_rate, DECELERATION_RATE, "deceleration_rate");
        self.timer_duration = positive_or(self.timer_duration, TIMER_DURATION, "timer_duration");

        if let Err(e) = SegmentSet::new(self.segments.iter().cloned()) {
            log::warn!("Invalid segments ({}), using default exercises", e);
            self.segments = DEFAULT_SEGMENTS.iter().map(|s| s.to_string()).collect();
        }
        self
    }

    /// Wheel face built from `segments`, or the default face if they are unusable
    pub fn segment_set(&self) -> SegmentSet {
        SegmentSet::new(self.segments.iter().cloned())
            .unwrap_or_else(|_| SegmentSet::from_trusted(&DEFAULT_SEGMENTS))
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.validated())
    }

    /// Read settings, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
