//! Keyboard/mouse polling turned into per-frame movement intents.
use raylib::prelude::*;

/// What the player asked for this frame, independent of the input device.
///
/// `forward`, `strafe` and `turn` are in `[-1, 1]`; `look_delta` is already in
/// radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputIntents {
    pub forward: f32,
    pub strafe: f32,
    pub turn: f32,
    pub look_delta: f32,
    pub sprint: bool,
    pub interact: bool,
}

#[inline]
fn axis(window: &RaylibHandle, neg: KeyboardKey, pos: KeyboardKey) -> f32 {
    let mut v = 0.0;
    if window.is_key_down(pos) {
        v += 1.0;
    }
    if window.is_key_down(neg) {
        v -= 1.0;
    }
    v
}

/// WASD + arrows + mouse look (only while the cursor is captured) + Shift
/// sprint + Space interaction.
pub fn process_events(window: &RaylibHandle, mouse_sensitivity: f32) -> InputIntents {
    let look_delta = if window.is_cursor_hidden() && window.is_window_focused() {
        window.get_mouse_delta().x * mouse_sensitivity
    } else {
        0.0
    };
    InputIntents {
        forward: axis(window, KeyboardKey::KEY_S, KeyboardKey::KEY_W),
        strafe: axis(window, KeyboardKey::KEY_A, KeyboardKey::KEY_D),
        turn: axis(window, KeyboardKey::KEY_LEFT, KeyboardKey::KEY_RIGHT),
        look_delta,
        sprint: window.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
            || window.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT),
        interact: window.is_key_pressed(KeyboardKey::KEY_SPACE),
    }
}
