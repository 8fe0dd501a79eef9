//! Procedural enemy spawning
//!
//! A time accumulator decides *when* to spawn; a weighted draw decides *what*.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, EnemyKind};
use crate::consts::*;
use crate::settings::DifficultyProfile;

/// Cumulative thresholds for the variant draw
const BLOCK_WEIGHT: f32 = 0.55;
const MISSILE_WEIGHT: f32 = 0.78;

/// Spawn heights above the top edge, per variant
const BLOCK_SPAWN_Y: f32 = -60.0;
const MISSILE_SPAWN_Y: f32 = -40.0;
const ZIGZAG_SPAWN_Y: f32 = -80.0;

/// Upper bound (exclusive) for the zigzag phase offset
const ZIGZAG_OFFSET_RANGE: f32 = 1000.0;

/// Emits one enemy every `delay()` seconds of running time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    timer: f32,
    profile: DifficultyProfile,
}

impl Spawner {
    pub fn new(profile: DifficultyProfile) -> Self {
        Self { timer: 0.0, profile }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn set_profile(&mut self, profile: DifficultyProfile) {
        self.profile = profile;
    }

    /// Seconds accumulated toward the next spawn
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Seconds between spawns, never below the hard floor
    pub fn delay(&self) -> f32 {
        SPAWN_MIN_DELAY.max(SPAWN_BASE_DELAY * self.profile.spawn_mult)
    }

    /// Accumulate `dt`; returns true when an enemy should be emitted
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer >= self.delay() {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}

/// Roll a random enemy at the top of the playfield
pub fn roll_enemy<R: Rng>(rng: &mut R, id: u32, profile: DifficultyProfile) -> Enemy {
    let base_speed = ENEMY_BASE_SPEED * profile.speed_mult;
    let roll: f32 = rng.random();
    let x = rng.random_range(ENEMY_SPAWN_MARGIN..=PLAYFIELD_WIDTH as i32 - ENEMY_SPAWN_MARGIN) as f32;

    if roll < BLOCK_WEIGHT {
        let size = rng.random_range(48..=86) as f32;
        let speed = base_speed * rng.random_range(0.9..=1.35);
        Enemy::new(id, Vec2::new(x, BLOCK_SPAWN_Y), size, speed, EnemyKind::Block)
    } else if roll < MISSILE_WEIGHT {
        let size = rng.random_range(36..=56) as f32;
        let speed = base_speed * rng.random_range(1.6..=2.6);
        Enemy::new(id, Vec2::new(x, MISSILE_SPAWN_Y), size, speed, EnemyKind::Missile)
    } else {
        let size = rng.random_range(46..=72) as f32;
        let amplitude = rng.random_range(60..=140) as f32;
        let frequency = rng.random_range(1.2..=3.0);
        let speed = base_speed * rng.random_range(0.9..=1.4);
        let offset = rng.random::<f32>() * ZIGZAG_OFFSET_RANGE;
        let kind = EnemyKind::Zigzag {
            amplitude,
            frequency,
            offset,
        };
        Enemy::new(id, Vec2::new(x, ZIGZAG_SPAWN_Y), size, speed, kind)
    }
}
