//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use super::collision::circle_intersects_rect;
use super::particles::{spawn_burst, update_particles};
use super::spawner::roll_enemy;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
///
/// Returns the events raised during the step, in order. Nothing happens while
/// paused or after game over.
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Don't tick if paused or game over
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    state.clock += dt;

    // 1. Spawner
    if state.spawner.advance(dt) {
        let id = state.next_entity_id();
        let enemy = roll_enemy(&mut state.rng, id, state.spawner.profile());
        log::debug!(
            "Spawned {} #{} at x={:.0} size={:.0} speed={:.0}",
            enemy.kind.name(),
            enemy.id,
            enemy.pos.x,
            enemy.size,
            enemy.speed
        );
        events.push(GameEvent::EnemySpawned { kind: enemy.kind });
        state.enemies.push(enemy);
        state.enemies_spawned += 1;
    }

    // 2. Player
    state.player.update(dt);

    // 3. Enemies: move, then drop the ones that left the field
    let clock = state.clock;
    let GameState {
        enemies,
        score,
        high_score,
        enemies_dodged,
        ..
    } = state;
    enemies.retain_mut(|enemy| {
        enemy.update(dt, clock);
        if !enemy.has_exited() {
            return true;
        }
        *score += 1;
        *enemies_dodged += 1;
        events.push(GameEvent::EnemyDodged { score: *score });
        if *score > *high_score {
            *high_score = *score;
            events.push(GameEvent::NewHighScore { score: *score });
        }
        false
    });

    // 4. Particles
    update_particles(&mut state.particles, dt);

    // 5. Collisions (at most one per tick)
    let player = &state.player;
    let hit = state
        .enemies
        .iter()
        .position(|e| circle_intersects_rect(player.pos, player.radius, &e.rect()));

    if let Some(index) = hit {
        let pos = state.player.pos;
        let enemy = state.enemies.swap_remove(index);
        // The explosion ends the session; everything still falling goes with it
        state.enemies_destroyed += 1 + state.enemies.len() as u64;
        state.enemies.clear();
        state.collisions += 1;
        spawn_burst(&mut state.particles, &mut state.rng, pos, COLLISION_BURST_COUNT);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Collision { pos });
        log::info!(
            "Hit by {} #{}; game over with score {} (best {})",
            enemy.kind.name(),
            enemy.id,
            state.score,
            state.high_score
        );
    }

    events
}
