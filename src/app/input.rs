//! Platform-agnostic input state
//!
//! Frontends translate their native events into [`Key`], [`MouseButton`] and
//! [`ButtonState`] and inject them here. Per-frame edges ("just pressed")
//! are cleared by [`Input::start_frame`].

use std::collections::HashSet;

/// Keys the application reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    /// Toggles the whole-body spin.
    S,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// What the user asked for this frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Actions {
    pub toggle_dance: bool,
    pub toggle_spin: bool,
    pub exit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_keys: HashSet<Key>,
    just_pressed_keys: HashSet<Key>,

    pressed_mouse: HashSet<MouseButton>,
    just_pressed_mouse: HashSet<MouseButton>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the edge state left over from the previous frame.
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_pressed_mouse.clear();
    }

    /// Key repeat does not produce a second "just pressed".
    pub fn inject_key(&mut self, key: Key, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_keys.insert(key) {
                    self.just_pressed_keys.insert(key);
                }
            }
            ButtonState::Released => {
                self.pressed_keys.remove(&key);
            }
        }
    }

    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_mouse.insert(button) {
                    self.just_pressed_mouse.insert(button);
                }
            }
            ButtonState::Released => {
                self.pressed_mouse.remove(&button);
            }
        }
    }

    #[must_use]
    pub fn get_key_down(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    #[must_use]
    pub fn get_mouse_button_down(&self, button: MouseButton) -> bool {
        self.just_pressed_mouse.contains(&button)
    }

    /// Maps this frame's presses onto application actions.
    ///
    /// Space or a left click toggles dancing, `S` toggles the spin and
    /// Escape exits.
    #[must_use]
    pub fn actions(&self) -> Actions {
        Actions {
            toggle_dance: self.get_key_down(Key::Space)
                || self.get_mouse_button_down(MouseButton::Left),
            toggle_spin: self.get_key_down(Key::S),
            exit: self.get_key_down(Key::Escape),
        }
    }
}
