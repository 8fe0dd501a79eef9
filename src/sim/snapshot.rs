//! Frozen per-tick view of the simulation for the render layer
//!
//! The renderer only ever reads this; nothing flows back into the sim.

use glam::Vec2;
use serde::Serialize;

use super::state::{EnemyKind, GameState, Rgb};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub pulse: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: f32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgb,
    /// 1.0 when fresh, 0.0 when expired
    pub life: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerView {
                pos: state.player.pos,
                radius: state.player.radius,
                pulse: state.player.pulse,
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    size: e.size,
                    kind: e.kind,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    life: p.remaining(),
                })
                .collect(),
            score: state.score,
            high_score: state.high_score,
            paused: state.is_paused(),
            game_over: state.is_game_over(),
        }
    }
}
