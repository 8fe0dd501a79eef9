//! Game state and core simulation types
//!
//! Everything the tick advances lives here. The state is an owned value held
//! by whoever drives the loop; there is no global game instance.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawner::Spawner;
use crate::clamp;
use crate::consts::*;
use crate::settings::Difficulty;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Frozen until toggled back
    Paused,
    /// Player was hit; only a reset leaves this phase
    GameOver,
}

/// Something that happened during a tick that the outside world may act on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemySpawned { kind: EnemyKind },
    /// An enemy left the bottom of the playfield
    EnemyDodged { score: u32 },
    /// Score passed the best score; persist it
    NewHighScore { score: u32 },
    /// Player was hit at `pos`; the run is over
    Collision { pos: Vec2 },
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub target: Vec2,
    /// Collision radius (pulse never changes it)
    pub radius: f32,
    pub speed: f32,
    /// Render scale around 1.0
    pub pulse: f32,
    /// Seconds of simulated time driving the pulse
    pulse_phase: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            target: pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_BASE_SPEED,
            pulse: 1.0,
            pulse_phase: 0.0,
        }
    }

    /// Default spawn point: centered, a little above the control strip
    pub fn start_position() -> Vec2 {
        Vec2::new(
            (PLAYFIELD_WIDTH / 2.0).floor(),
            PLAYFIELD_HEIGHT - PLAYER_START_OFFSET,
        )
    }

    /// Store a movement target, clamped so it is always reachable on-screen
    pub fn set_target(&mut self, tx: f32, ty: f32) {
        let r = self.radius;
        self.target = Vec2::new(
            clamp(tx, r, PLAYFIELD_WIDTH - r),
            clamp(ty, r, PLAYFIELD_HEIGHT - r - BOTTOM_UI_MARGIN),
        );
    }

    /// Move toward the target without overshooting, then refresh the pulse
    pub fn update(&mut self, dt: f32) {
        let delta = self.target - self.pos;
        let dist = delta.length();
        if dist > PLAYER_REST_DISTANCE {
            let step = (self.speed * dt).min(dist);
            self.pos += delta / dist * step;
        }

        self.pulse_phase += dt;
        self.pulse = PLAYER_PULSE_BASE
            + PLAYER_PULSE_AMPLITUDE
                * (std::f32::consts::TAU * PLAYER_PULSE_SPEED * self.pulse_phase).sin();
    }
}

/// Enemy motion behaviors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Falls straight down
    Block,
    /// Narrow and fast
    Missile,
    /// Sways sideways while falling
    Zigzag {
        amplitude: f32,
        /// Angular frequency (rad/s)
        frequency: f32,
        /// Per-instance phase so zigzags desynchronize
        offset: f32,
    },
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Block => "block",
            EnemyKind::Missile => "missile",
            EnemyKind::Zigzag { .. } => "zigzag",
        }
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Center of the square
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
    /// Fall speed (units/s, always positive)
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, size: f32, speed: f32, kind: EnemyKind) -> Self {
        debug_assert!(speed > 0.0, "enemy speed must be positive");
        Self {
            id,
            pos,
            size,
            speed,
            kind,
        }
    }

    /// Advance by `dt`; `clock` is the simulation phase clock in seconds
    pub fn update(&mut self, dt: f32, clock: f32) {
        self.pos.y += self.speed * dt;
        if let EnemyKind::Zigzag {
            amplitude,
            frequency,
            offset,
        } = self.kind
        {
            self.pos.x += ((clock + offset) * frequency).sin() * amplitude * dt;
        }
    }

    /// Bounding box used for collision
    pub fn rect(&self) -> Rect {
        Rect::centered_square(self.pos, self.size)
    }

    /// True once the top edge has passed the bottom boundary plus slop
    pub fn has_exited(&self) -> bool {
        self.pos.y - self.size / 2.0 > PLAYFIELD_HEIGHT + ENEMY_EXIT_SLOP
    }
}

/// RGB color for particles
pub type Rgb = [u8; 3];

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds the particle lives
    pub lifetime: f32,
    /// Seconds lived so far
    pub age: f32,
    pub color: Rgb,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, lifetime: f32, color: Rgb, size: f32) -> Self {
        Self {
            pos,
            vel,
            lifetime,
            age: 0.0,
            color,
            size,
        }
    }

    /// Gravity is applied after the position update, so it only shows up in
    /// the next tick's displacement.
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos += self.vel * dt;
        self.vel.y += PARTICLE_GRAVITY * dt;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }

    /// Remaining life in [0, 1], used for fade-out
    pub fn remaining(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        clamp(1.0 - self.age / self.lifetime, 0.0, 1.0)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub spawner: Spawner,
    pub score: u32,
    /// Best score ever; loaded from and saved to persistence by the driver
    pub high_score: u32,
    /// Seconds of simulated running time (drives zigzag motion)
    pub clock: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Lifetime totals for this run
    pub enemies_spawned: u64,
    pub enemies_dodged: u64,
    /// Enemies removed because a collision ended the run
    pub enemies_destroyed: u64,
    pub collisions: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, difficulty: Difficulty, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            difficulty,
            player: Player::new(Player::start_position()),
            enemies: Vec::new(),
            particles: Vec::new(),
            spawner: Spawner::new(difficulty.profile()),
            score: 0,
            high_score,
            clock: 0.0,
            time_ticks: 0,
            enemies_spawned: 0,
            enemies_dodged: 0,
            enemies_destroyed: 0,
            collisions: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Set the player's movement target (clamped to the playfield)
    pub fn set_player_target(&mut self, x: f32, y: f32) {
        self.player.set_target(x, y);
    }

    /// Shift the current target sideways (repeated presses stack)
    pub fn nudge_left(&mut self) {
        let target = self.player.target;
        self.player.set_target(target.x - NUDGE_DISTANCE, target.y);
    }

    pub fn nudge_right(&mut self) {
        let target = self.player.target;
        self.player.set_target(target.x + NUDGE_DISTANCE, target.y);
    }

    /// Toggle Running <-> Paused. Has no effect after game over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Start a fresh run. The best score and difficulty carry over.
    pub fn reset(&mut self) {
        self.player = Player::new(Player::start_position());
        self.enemies.clear();
        self.particles.clear();
        self.spawner.reset();
        self.score = 0;
        self.clock = 0.0;
        self.time_ticks = 0;
        self.enemies_spawned = 0;
        self.enemies_dodged = 0;
        self.enemies_destroyed = 0;
        self.collisions = 0;
        self.phase = GamePhase::Running;
        log::info!("Run reset (best score {})", self.high_score);
    }

    /// Switch difficulty; applies to spawns from now on
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.spawner.set_profile(difficulty.profile());
    }
}
