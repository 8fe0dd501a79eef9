//! Game settings and preferences
//!
//! Persisted as JSON next to the high score. The simulation only reads these.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Settings file name inside the user data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Joystick sensitivity limits
pub const MIN_JOYSTICK_SENSITIVITY: f32 = 0.1;
pub const MAX_JOYSTICK_SENSITIVITY: f32 = 3.0;

/// Multipliers applied to spawn cadence and enemy speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Scales the delay between spawns (smaller = more enemies)
    pub spawn_mult: f32,
    /// Scales enemy fall speed
    pub speed_mult: f32,
}

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parse a config key, falling back to `Normal` for anything unknown
    pub fn from_key(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, using Normal", s);
            Difficulty::Normal
        })
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_mult: 1.35,
                speed_mult: 0.85,
            },
            Difficulty::Normal => DifficultyProfile {
                spawn_mult: 1.0,
                speed_mult: 1.0,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_mult: 0.75,
                speed_mult: 1.3,
            },
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        Difficulty::from_key(&s)
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.as_str().to_string()
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Scales how far the joystick pushes the target
    pub joystick_sensitivity: f32,
    /// Play the explosion cue
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            joystick_sensitivity: 1.0,
            sound: true,
        }
    }
}

impl Settings {
    /// Sensitivity kept inside the supported range
    pub fn effective_sensitivity(&self) -> f32 {
        if self.joystick_sensitivity.is_finite() {
            self.joystick_sensitivity
                .clamp(MIN_JOYSTICK_SENSITIVITY, MAX_JOYSTICK_SENSITIVITY)
        } else {
            1.0
        }
    }

    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        persistence::user_data_dir()
            .ok()
            .map(|d| d.join(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let parsed = persistence::read_text(path)
            .and_then(|json| Ok(serde_json::from_str::<Settings>(&json)?));
        match parsed {
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

    /// Save settings (best-effort)
    pub fn save(&self) {
        if let Some(path) = Self::default_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        let result = serde_json::to_string_pretty(self)
            .map_err(persistence::PersistenceError::from)
            .and_then(|json| persistence::write_text(path, &json));
        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}
