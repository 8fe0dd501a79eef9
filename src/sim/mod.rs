//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Simulated clocks only (no wall-clock time)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_intersects_rect};
pub use particles::{EXPLOSION_PALETTE, spawn_burst, update_particles};
pub use snapshot::{EnemyView, ParticleView, PlayerView, RenderSnapshot};
pub use spawner::{Spawner, roll_enemy};
pub use state::{Enemy, EnemyKind, GameEvent, GamePhase, GameState, Particle, Player};
pub use tick::tick;
