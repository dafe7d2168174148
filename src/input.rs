//! Held-key tracking.
//!
//! Keys are recorded on key-down and forgotten on key-up.  Each entry keeps
//! the tick it was last pressed so terminals that never send key-up can have
//! stale keys expired with [`InputSampler::release_stale`].

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
}

/// Snapshot of the held keys consumed by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Clone, Debug, Default)]
pub struct InputSampler {
    // key → tick of the last press/repeat
    held: HashMap<Key, u64>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key, tick: u64) {
        self.held.insert(key, tick);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    /// Drop the fire key so a shot needs a fresh press.
    pub fn clear_fire(&mut self) {
        self.held.remove(&Key::Fire);
    }

    /// Forget keys whose last press is more than `window` ticks old.
    pub fn release_stale(&mut self, now: u64, window: u64) {
        self.held
            .retain(|_, &mut last| now.saturating_sub(last) <= window);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            fire: self.is_held(Key::Fire),
        }
    }
}
