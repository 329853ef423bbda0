//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib once per frame and
//! writes the results into [`crate::resources::input::InputState`].
use raylib::prelude::*;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse input and update the snapshot.
pub fn update_input_state(rl: &RaylibHandle, input: &mut InputState) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let pointer = rl.get_mouse_position();
    let primary_down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    input.sample(is_key_down, pointer, primary_down);
}
