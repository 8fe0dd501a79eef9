//! Fixed timestep game driver
//!
//! Owns the simulation and its collaborators. The host calls `update` once
//! per rendered frame with the real frame time, forwards pointer events, and
//! reads `snapshot()` to draw.

use glam::Vec2;

use crate::assets::Assets;
use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::highscores::HighScoreFile;
use crate::input::{InputAction, InputMapper};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RenderSnapshot, tick};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub input: InputMapper,
    pub audio: AudioManager,
    pub assets: Assets,
    high_scores: HighScoreFile,
    accumulator: f32,
}

impl Game {
    pub fn new(
        seed: u64,
        settings: Settings,
        high_scores: HighScoreFile,
        assets: Assets,
        surface: Vec2,
    ) -> Self {
        let best = high_scores.load();
        let audio = AudioManager::new(assets.explosion_sound.clone(), settings.sound);
        let input = InputMapper::new(surface.x, surface.y, settings.effective_sensitivity());
        log::info!(
            "Dodge Master starting: difficulty {}, best score {}",
            settings.difficulty.as_str(),
            best
        );
        Self {
            state: GameState::new(seed, settings.difficulty, best),
            settings,
            input,
            audio,
            assets,
            high_scores,
            accumulator: 0.0,
        }
    }

    /// Run as many fixed ticks as the elapsed frame time covers
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// One fixed tick plus its side effects
    pub fn step(&mut self) {
        let events = tick(&mut self.state, SIM_DT);
        self.handle_events(&events);
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::NewHighScore { score } => self.high_scores.save(score),
                GameEvent::Collision { .. } => {
                    self.audio.play(SoundEffect::Explosion);
                }
                GameEvent::EnemySpawned { .. } | GameEvent::EnemyDodged { .. } => {}
            }
        }
    }

    pub fn apply(&mut self, action: InputAction) {
        if action == InputAction::Reset {
            self.accumulator = 0.0;
        }
        action.apply(&mut self.state);
    }

    pub fn pointer_down(&mut self, device: Vec2) {
        if let Some(action) = self.input.pointer_down(device, &self.state) {
            self.apply(action);
        }
    }

    pub fn pointer_move(&mut self, device: Vec2) {
        if let Some(action) = self.input.pointer_move(device, &self.state) {
            self.apply(action);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(action) = self.input.pointer_up(&self.state) {
            self.apply(action);
        }
    }

    /// Replace settings; difficulty applies to future spawns
    pub fn update_settings(&mut self, settings: Settings) {
        self.state.set_difficulty(settings.difficulty);
        self.input.set_sensitivity(settings.effective_sensitivity());
        self.audio.set_enabled(settings.sound);
        self.settings = settings;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Asset;
    use crate::sim::state::{Enemy, EnemyKind};

    fn game_in(dir: &std::path::Path) -> Game {
        let mut assets = Assets::default();
        assets.explosion_sound = Some(Asset {
            path: dir.join("explosion.wav"),
            bytes: vec![0; 4],
        });
        Game::new(
            7,
            Settings::default(),
            HighScoreFile::at(dir.join("highscore.txt")),
            assets,
            Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        )
    }

    #[test]
    fn test_update_runs_fixed_substeps() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        assert_eq!(game.update(SIM_DT * 0.5), 0);
        assert_eq!(game.update(SIM_DT * 0.6), 1);
        // Large frames are clamped and capped
        assert!(game.update(10.0) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_collision_plays_explosion() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        let pos = game.state.player.pos;
        let id = game.state.next_entity_id();
        game.state
            .enemies
            .push(Enemy::new(id, pos, 60.0, 1.0, EnemyKind::Block));
        game.step();
        assert!(game.snapshot().game_over);
        assert_eq!(game.audio.drain(), vec![SoundEffect::Explosion]);
    }

    #[test]
    fn test_new_high_score_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        let id = game.state.next_entity_id();
        game.state.enemies.push(Enemy::new(
            id,
            Vec2::new(100.0, 1429.0),
            60.0,
            160.0,
            EnemyKind::Block,
        ));
        game.step();
        assert_eq!(game.state.high_score, 1);
        assert_eq!(HighScoreFile::at(dir.path().join("highscore.txt")).load(), 1);

        // A new game picks it up
        let game = game_in(dir.path());
        assert_eq!(game.state.high_score, 1);
    }

    #[test]
    fn test_pointer_pause_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        game.pointer_down(Vec2::new(640.0, 80.0));
        assert!(game.snapshot().paused);
        game.pointer_down(Vec2::new(640.0, 80.0));
        assert!(!game.snapshot().paused);
    }
}
