//! Dodge Master - A single-screen "dodge the falling blocks" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `input`: Touch/pointer mapping onto player targets
//! - `settings`: Difficulty and player preferences
//! - `highscores` / `persistence`: Best score stored in the user data directory
//! - `assets` / `audio`: Optional assets with silent fallback
//! - `game`: Fixed timestep driver wiring the above together

pub mod assets;
pub mod audio;
pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScoreFile;
pub use settings::{Difficulty, DifficultyProfile, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will try to catch up on
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical playfield dimensions (y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 720.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1280.0;
    /// Strip at the bottom reserved for on-screen controls
    pub const BOTTOM_UI_MARGIN: f32 = 200.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 34.0;
    pub const PLAYER_BASE_SPEED: f32 = 520.0;
    /// Pulse frequency in Hz
    pub const PLAYER_PULSE_SPEED: f32 = 2.6;
    pub const PLAYER_PULSE_BASE: f32 = 0.9;
    pub const PLAYER_PULSE_AMPLITUDE: f32 = 0.18;
    /// Distance below which the player is considered at rest
    pub const PLAYER_REST_DISTANCE: f32 = 1.0;
    /// Start position distance from the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 320.0;

    /// Enemy fall speed before difficulty and variant multipliers
    pub const ENEMY_BASE_SPEED: f32 = 160.0;
    /// Horizontal margin kept clear when choosing a spawn column
    pub const ENEMY_SPAWN_MARGIN: i32 = 60;
    /// How far past the bottom edge an enemy travels before it counts as dodged
    pub const ENEMY_EXIT_SLOP: f32 = 120.0;

    /// Spawn cadence (seconds)
    pub const SPAWN_BASE_DELAY: f32 = 0.70;
    pub const SPAWN_MIN_DELAY: f32 = 0.18;

    /// Particle defaults
    pub const PARTICLE_GRAVITY: f32 = 420.0;
    pub const COLLISION_BURST_COUNT: usize = 28;
    pub const DEFAULT_BURST_COUNT: usize = 18;

    /// Horizontal distance covered by a nudge button press
    pub const NUDGE_DISTANCE: f32 = 140.0;
}

/// Restrict `v` to `[lo, hi]`
///
/// Unlike `f32::clamp` this never panics when `lo > hi`; the lower bound wins,
/// matching `max(lo, min(hi, v))`.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}
