//! Per-tick input snapshot resource.
//!
//! Captures the subset of keyboard and pointer state the game cares about and
//! exposes it to screens and systems via the [`InputState`] resource.
//! Defaults use WASD for primary movement and arrow keys for secondary
//! directions; both sets steer the vehicle.
//!
//! The snapshot is sampled once per tick by
//! [`crate::systems::input::update_input_state`]. Edges (`just_pressed`,
//! `just_released`, pointer clicks) are derived by comparing against the
//! previous sample, so the resource itself is the only state needed.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down on this tick.
    pub just_pressed: bool,
    /// Whether the key went up on this tick.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Released state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Store the new level and derive edges from the previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Pointer position and primary button, with the previous button level.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    pub primary_down: bool,
    pub previous_primary_down: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            primary_down: false,
            previous_primary_down: false,
        }
    }
}

impl PointerState {
    pub fn update(&mut self, position: Vector2, primary_down: bool) {
        self.previous_primary_down = self.primary_down;
        self.primary_down = primary_down;
        self.position = position;
    }

    /// A completed click: the primary button was released on this tick.
    pub fn clicked(&self) -> bool {
        self.previous_primary_down && !self.primary_down
    }
}

/// Resource capturing the per-tick input relevant to the game.
///
/// Fields are grouped by purpose: main movement (WASD), secondary movement
/// (arrow keys), actions and the pointer.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Actions
    pub action_back: BoolState,
    pub action_1: BoolState,
    pub action_2: BoolState,
    pub action_reset: BoolState,
    pub action_speed_report: BoolState,
    // Mouse
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            action_1: BoolState::bound(KeyboardKey::KEY_SPACE),
            action_2: BoolState::bound(KeyboardKey::KEY_ENTER),
            action_reset: BoolState::bound(KeyboardKey::KEY_R),
            action_speed_report: BoolState::bound(KeyboardKey::KEY_LEFT_SHIFT),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    fn keys_mut(&mut self) -> [&mut BoolState; 13] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_left,
            &mut self.maindirection_down,
            &mut self.maindirection_right,
            &mut self.secondarydirection_up,
            &mut self.secondarydirection_down,
            &mut self.secondarydirection_left,
            &mut self.secondarydirection_right,
            &mut self.action_back,
            &mut self.action_1,
            &mut self.action_2,
            &mut self.action_reset,
            &mut self.action_speed_report,
        ]
    }

    /// Take a new snapshot.
    ///
    /// `is_down` reports whether a key is held; it is queried once per
    /// binding.
    pub fn sample<F>(&mut self, is_down: F, pointer_position: Vector2, primary_down: bool)
    where
        F: Fn(KeyboardKey) -> bool,
    {
        for key in self.keys_mut() {
            let down = is_down(key.key_binding);
            key.update(down);
        }
        self.pointer.update(pointer_position, primary_down);
    }

    pub fn up(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    pub fn left(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn right(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }

    /// Space or Enter held.
    pub fn confirm_held(&self) -> bool {
        self.action_1.active || self.action_2.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::bound(KeyboardKey::KEY_R);
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.active && bs.just_released);
        bs.update(false);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.secondarydirection_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.action_reset.key_binding, KeyboardKey::KEY_R);
        assert_eq!(
            input.action_speed_report.key_binding,
            KeyboardKey::KEY_LEFT_SHIFT
        );
    }

    #[test]
    fn test_sample_arrows_alias_wasd() {
        let mut input = InputState::default();
        input.sample(|k| k == KeyboardKey::KEY_LEFT, Vector2::zero(), false);
        assert!(input.left());
        assert!(!input.maindirection_left.active);
        input.sample(|k| k == KeyboardKey::KEY_A, Vector2::zero(), false);
        assert!(input.left());
        assert!(!input.right() && !input.up() && !input.down());
    }

    #[test]
    fn test_pointer_click_is_release_edge() {
        let mut input = InputState::default();
        let pos = Vector2 { x: 5.0, y: 6.0 };
        input.sample(|_| false, pos, true);
        assert!(!input.pointer.clicked());
        input.sample(|_| false, pos, true);
        assert!(!input.pointer.clicked());
        input.sample(|_| false, pos, false);
        assert!(input.pointer.clicked());
        input.sample(|_| false, pos, false);
        assert!(!input.pointer.clicked());
    }

    #[test]
    fn test_confirm_held() {
        let mut input = InputState::default();
        input.sample(|k| k == KeyboardKey::KEY_ENTER, Vector2::zero(), false);
        assert!(input.confirm_held());
    }
}
