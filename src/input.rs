//! Persistent key latch
//!
//! Browsers re-fire `keydown` while a key is held. The latch keeps the
//! level-triggered held state for continuous movement and reports whether a
//! key-down is a fresh press so one-shot actions (jump, dash, polarity
//! toggle) fire exactly once per physical press.

/// Logical keys the games care about. Bindings are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Space: start/restart, or the in-game action (polarity toggle)
    Action,
    /// Shift: dash
    Dash,
}

const KEY_COUNT: usize = 6;

impl Key {
    /// Map a browser `KeyboardEvent.code` to a logical key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Space" => Some(Key::Action),
            "ShiftLeft" | "ShiftRight" => Some(Key::Dash),
            _ => None,
        }
    }
}

/// Held-state table for all logical keys
#[derive(Debug, Default)]
pub struct InputLatch {
    held: [bool; KEY_COUNT],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns true when the key was previously up,
    /// i.e. this is a fresh press and not keyboard auto-repeat.
    pub fn press(&mut self, key: Key) -> bool {
        let fresh = !self.held[key as usize];
        self.held[key as usize] = true;
        fresh
    }

    /// Record a key-up
    pub fn release(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }
}
