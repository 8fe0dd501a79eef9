//! Touch/pointer input mapping
//!
//! Raw pointer coordinates arrive in device surface space (pixels, y down).
//! They are scaled into the logical playfield and matched against the
//! on-screen controls: pause button, left/right nudge buttons, a virtual
//! joystick, and the restart button shown after game over.

use glam::Vec2;

use crate::consts::*;
use crate::sim::collision::Rect;
use crate::sim::state::GameState;

/// Pause button, top-right corner
pub const PAUSE_BUTTON: Rect = Rect {
    x: PLAYFIELD_WIDTH - 180.0,
    y: 40.0,
    w: 140.0,
    h: 80.0,
};

pub const BUTTON_WIDTH: f32 = 220.0;
pub const BUTTON_HEIGHT: f32 = 140.0;

/// Left nudge button, bottom-left corner
pub const LEFT_BUTTON: Rect = Rect {
    x: 40.0,
    y: PLAYFIELD_HEIGHT - 40.0 - BUTTON_HEIGHT,
    w: BUTTON_WIDTH,
    h: BUTTON_HEIGHT,
};

/// Right nudge button, bottom-right corner
pub const RIGHT_BUTTON: Rect = Rect {
    x: PLAYFIELD_WIDTH - BUTTON_WIDTH - 40.0,
    y: PLAYFIELD_HEIGHT - 40.0 - BUTTON_HEIGHT,
    w: BUTTON_WIDTH,
    h: BUTTON_HEIGHT,
};

/// Restart button, centered; only live after game over
pub const RESTART_BUTTON: Rect = Rect {
    x: PLAYFIELD_WIDTH / 2.0 - 80.0,
    y: PLAYFIELD_HEIGHT / 2.0 - 30.0,
    w: 160.0,
    h: 60.0,
};

pub const JOYSTICK_BASE_POS: Vec2 = Vec2::new(120.0, PLAYFIELD_HEIGHT - 200.0);
pub const JOYSTICK_BASE_RADIUS: f32 = 100.0;
pub const JOYSTICK_KNOB_RADIUS: f32 = 46.0;
/// Touches this far from the base still grab the stick
pub const JOYSTICK_GRAB_RADIUS: f32 = JOYSTICK_BASE_RADIUS * 1.7;
/// Furthest the knob travels from the base center
pub const JOYSTICK_MAX_TRAVEL: f32 = JOYSTICK_BASE_RADIUS - JOYSTICK_KNOB_RADIUS - 8.0;
/// Target offset at full deflection (before sensitivity)
pub const JOYSTICK_REACH: f32 = 380.0;

/// Strictly inside (edges excluded)
fn contains(rect: &Rect, p: Vec2) -> bool {
    p.x > rect.x && p.x < rect.x + rect.w && p.y > rect.y && p.y < rect.y + rect.h
}

/// Player-facing command produced from a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    TogglePause,
    NudgeLeft,
    NudgeRight,
    /// Move the player toward this logical point
    Target(Vec2),
    Reset,
}

impl InputAction {
    pub fn apply(self, state: &mut GameState) {
        match self {
            InputAction::TogglePause => state.toggle_pause(),
            InputAction::NudgeLeft => state.nudge_left(),
            InputAction::NudgeRight => state.nudge_right(),
            InputAction::Target(t) => state.set_player_target(t.x, t.y),
            InputAction::Reset => state.reset(),
        }
    }
}

/// Maps pointer events onto input actions
#[derive(Debug, Clone)]
pub struct InputMapper {
    /// Device surface size in pixels
    surface: Vec2,
    sensitivity: f32,
    joystick_active: bool,
    knob_pos: Vec2,
}

impl InputMapper {
    pub fn new(surface_width: f32, surface_height: f32, sensitivity: f32) -> Self {
        let mut mapper = Self {
            surface: Vec2::ONE,
            sensitivity,
            joystick_active: false,
            knob_pos: JOYSTICK_BASE_POS,
        };
        mapper.resize(surface_width, surface_height);
        mapper
    }

    /// Surface was resized; zero sizes are ignored
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.surface = Vec2::new(width, height);
        }
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    pub fn joystick_active(&self) -> bool {
        self.joystick_active
    }

    /// Knob position in logical coordinates, for rendering
    pub fn knob_pos(&self) -> Vec2 {
        self.knob_pos
    }

    /// Device pixels to logical playfield units
    pub fn to_logical(&self, device: Vec2) -> Vec2 {
        device * Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) / self.surface
    }

    /// Pointer pressed at `device` coordinates
    pub fn pointer_down(&mut self, device: Vec2, state: &GameState) -> Option<InputAction> {
        let p = self.to_logical(device);

        if state.is_game_over() {
            return contains(&RESTART_BUTTON, p).then_some(InputAction::Reset);
        }
        if contains(&PAUSE_BUTTON, p) {
            return Some(InputAction::TogglePause);
        }
        if contains(&LEFT_BUTTON, p) {
            return Some(InputAction::NudgeLeft);
        }
        if contains(&RIGHT_BUTTON, p) {
            return Some(InputAction::NudgeRight);
        }
        if p.distance_squared(JOYSTICK_BASE_POS) <= JOYSTICK_GRAB_RADIUS * JOYSTICK_GRAB_RADIUS {
            self.joystick_active = true;
            return Some(self.steer(p, state));
        }
        None
    }

    /// Pointer dragged; only matters while the joystick is held
    pub fn pointer_move(&mut self, device: Vec2, state: &GameState) -> Option<InputAction> {
        if !self.joystick_active || state.is_paused() || state.is_game_over() {
            return None;
        }
        let p = self.to_logical(device);
        Some(self.steer(p, state))
    }

    /// Pointer released: recenter the stick and stop where the player is
    pub fn pointer_up(&mut self, state: &GameState) -> Option<InputAction> {
        if !self.joystick_active {
            return None;
        }
        self.joystick_active = false;
        self.knob_pos = JOYSTICK_BASE_POS;
        Some(InputAction::Target(state.player.pos))
    }

    /// Move the knob toward `p` and derive a horizontal target from it
    fn steer(&mut self, p: Vec2, state: &GameState) -> InputAction {
        let mut offset = p - JOYSTICK_BASE_POS;
        let dist = offset.length();
        if dist > JOYSTICK_MAX_TRAVEL && dist > 0.0 {
            offset = offset / dist * JOYSTICK_MAX_TRAVEL;
        }
        self.knob_pos = JOYSTICK_BASE_POS + offset;

        let nx = offset.x / JOYSTICK_MAX_TRAVEL;
        let player = state.player.pos;
        let tx = player.x + nx * JOYSTICK_REACH * self.sensitivity;
        InputAction::Target(Vec2::new(tx, player.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    fn state() -> GameState {
        GameState::new(1, Difficulty::Normal, 0)
    }

    /// Surface at half the logical resolution
    fn mapper() -> InputMapper {
        InputMapper::new(360.0, 640.0, 1.0)
    }

    #[test]
    fn test_to_logical_scales() {
        let m = mapper();
        assert_eq!(m.to_logical(Vec2::new(180.0, 320.0)), Vec2::new(360.0, 640.0));
    }

    #[test]
    fn test_buttons() {
        let mut m = mapper();
        let s = state();
        // Logical (640, 80) -> pause
        assert_eq!(
            m.pointer_down(Vec2::new(320.0, 40.0), &s),
            Some(InputAction::TogglePause)
        );
        // Logical (100, 1200) -> left
        assert_eq!(
            m.pointer_down(Vec2::new(50.0, 600.0), &s),
            Some(InputAction::NudgeLeft)
        );
        // Logical (600, 1200) -> right
        assert_eq!(
            m.pointer_down(Vec2::new(300.0, 600.0), &s),
            Some(InputAction::NudgeRight)
        );
        // Middle of the field does nothing
        assert_eq!(m.pointer_down(Vec2::new(180.0, 320.0), &s), None);
    }

    #[test]
    fn test_joystick_full_right() {
        let mut m = mapper();
        let s = state();
        // Logical (220, 1080): 100 to the right of the base, past max travel
        let action = m.pointer_down(Vec2::new(110.0, 540.0), &s);
        assert!(m.joystick_active());
        assert_eq!(m.knob_pos(), JOYSTICK_BASE_POS + Vec2::new(JOYSTICK_MAX_TRAVEL, 0.0));
        assert_eq!(action, Some(InputAction::Target(Vec2::new(360.0 + 380.0, 960.0))));

        let mut s = s;
        action.unwrap().apply(&mut s);
        // Clamped into the playfield
        assert_eq!(s.player.target, Vec2::new(720.0 - 34.0, 960.0));
    }

    #[test]
    fn test_joystick_drag_and_release() {
        let mut m = InputMapper::new(720.0, 1280.0, 0.5);
        let mut s = state();
        m.pointer_down(JOYSTICK_BASE_POS, &s);
        let action = m.pointer_move(JOYSTICK_BASE_POS - Vec2::new(23.0, 0.0), &s);
        // Half deflection left at half sensitivity
        assert_eq!(action, Some(InputAction::Target(Vec2::new(360.0 - 95.0, 960.0))));

        s.player.pos = Vec2::new(300.0, 960.0);
        assert_eq!(
            m.pointer_up(&s),
            Some(InputAction::Target(Vec2::new(300.0, 960.0)))
        );
        assert!(!m.joystick_active());
        assert_eq!(m.knob_pos(), JOYSTICK_BASE_POS);
        assert_eq!(m.pointer_up(&s), None);
    }

    #[test]
    fn test_drag_ignored_while_paused() {
        let mut m = InputMapper::new(720.0, 1280.0, 1.0);
        let mut s = state();
        m.pointer_down(JOYSTICK_BASE_POS, &s);
        s.toggle_pause();
        assert_eq!(m.pointer_move(JOYSTICK_BASE_POS, &s), None);
    }

    #[test]
    fn test_game_over_only_restart() {
        let mut m = InputMapper::new(720.0, 1280.0, 1.0);
        let mut s = state();
        s.phase = crate::sim::GamePhase::GameOver;
        assert_eq!(m.pointer_down(Vec2::new(640.0, 80.0), &s), None);
        assert_eq!(m.pointer_down(JOYSTICK_BASE_POS, &s), None);
        let action = m.pointer_down(Vec2::new(360.0, 640.0), &s);
        assert_eq!(action, Some(InputAction::Reset));
        action.unwrap().apply(&mut s);
        assert!(!s.is_game_over());
    }
}
