//! Keyboard input abstraction
//!
//! Key codes are platform-independent. Backends map their native codes onto
//! [`Key`] and feed presses into a [`KeyboardState`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Platform-independent key codes
///
/// Names serialize as the variant name (`"W"`, `"ShiftLeft"`, `"Escape"`),
/// which is the form used by binding configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Arrows
    Up,
    Down,
    Left,
    Right,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Special
    Escape,
    Space,
    Enter,
    Tab,
    Backspace,
}

/// Set of keys currently held down
///
/// Only the held state is tracked here. Edge detection belongs to the
/// binding layer, which compares action state between frames.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
}

impl KeyboardState {
    /// Create a keyboard state with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Check if a key is currently held
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Check if any of the given keys is held
    pub fn any_of(&self, keys: &[Key]) -> bool {
        keys.iter().any(|key| self.is_pressed(*key))
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut kb = KeyboardState::new();
        assert!(!kb.is_pressed(Key::W));

        kb.press(Key::W);
        kb.press(Key::W);
        assert!(kb.is_pressed(Key::W));
        assert_eq!(kb.pressed_count(), 1);

        kb.release(Key::W);
        assert!(!kb.is_pressed(Key::W));
        assert_eq!(kb.pressed_count(), 0);
    }

    #[test]
    fn test_any_of() {
        let mut kb = KeyboardState::new();
        kb.press(Key::ShiftRight);

        assert!(kb.any_of(&[Key::ShiftLeft, Key::ShiftRight]));
        assert!(!kb.any_of(&[Key::Space]));
        assert!(!kb.any_of(&[]));

        kb.release(Key::ShiftRight);
        assert!(!kb.any_of(&[Key::ShiftLeft, Key::ShiftRight]));
    }

    #[test]
    fn test_key_names_in_config() {
        #[derive(Deserialize)]
        struct Doc {
            keys: Vec<Key>,
        }

        let doc: Doc = toml::from_str(r#"keys = ["W", "ShiftLeft", "Escape"]"#).unwrap();
        assert_eq!(doc.keys, vec![Key::W, Key::ShiftLeft, Key::Escape]);
    }
}
