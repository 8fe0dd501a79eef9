//! Dodge Master entry point
//!
//! The native build has no window; it runs a headless session with a scripted
//! sweep so the simulation, persistence and logging can be exercised from the
//! command line. Pass a seed as the first argument to replay a run.

use std::path::Path;

use glam::Vec2;

use dodge_master::assets::{ASSETS_DIR, Assets};
use dodge_master::consts::*;
use dodge_master::{Game, HighScoreFile, Settings};

/// Give up after this much simulated time
const MAX_SESSION_SECS: f32 = 180.0;
/// Seconds per left-right sweep of the scripted player
const SWEEP_PERIOD: f32 = 3.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);

    let settings = Settings::load();
    let assets = Assets::load(Path::new(ASSETS_DIR));
    let mut game = Game::new(
        seed,
        settings,
        HighScoreFile::in_user_dir(),
        assets,
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
    );

    log::info!("Running headless session (seed {})", seed);

    let mut elapsed = 0.0;
    while !game.state.is_game_over() && elapsed < MAX_SESSION_SECS {
        // Scripted motion: sweep side to side along the player's row
        let phase = (elapsed / SWEEP_PERIOD) * std::f32::consts::TAU;
        let x = PLAYFIELD_WIDTH / 2.0 + phase.sin() * (PLAYFIELD_WIDTH / 2.0);
        let y = game.state.player.pos.y;
        game.state.set_player_target(x, y);

        elapsed += SIM_DT * game.update(SIM_DT) as f32;
        for cue in game.audio.drain() {
            log::debug!("Audio cue: {:?}", cue);
        }
    }

    let snapshot = game.snapshot();
    println!(
        "Score: {}  Best: {}  ({:.1}s, {} enemies spawned)",
        snapshot.score, snapshot.high_score, elapsed, game.state.enemies_spawned
    );
}
