//! Keyboard input handling.
//!
//! Keys are identified by the host's key string, lowercased on entry, so
//! `"W"` and `"w"` are the same key.

use engine_core::FlightIntent;
use std::collections::HashSet;

/// Key identifiers the flight controls listen to.
pub mod keys {
    pub const FORWARD: &str = "w";
    pub const BACK: &str = "s";
    pub const STRAFE_LEFT: &str = "a";
    pub const STRAFE_RIGHT: &str = "d";
    pub const ASCEND: &str = " ";
    pub const DESCEND: &str = "shift";
    pub const YAW_LEFT: &str = "q";
    pub const YAW_RIGHT: &str = "e";
    /// Restart the current mission.
    pub const RESTART: &str = "r";
}

/// Lowercase a host key identifier.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<String>,
    /// Keys that went down this frame. Auto-repeat does not count.
    keys_pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call once a frame has consumed its input.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Process a key press or release. Returns the normalized key.
    pub fn process_key(&mut self, key: &str, pressed: bool) -> String {
        let key = normalize_key(key);
        log::trace!("key {:?} {}", key, if pressed { "down" } else { "up" });
        if pressed {
            if !self.keys_held.contains(&key) {
                self.keys_pressed.insert(key.clone());
            }
            self.keys_held.insert(key.clone());
        } else {
            self.keys_held.remove(&key);
        }
        key
    }

    /// Forget every held key, e.g. when focus is lost.
    pub fn release_all(&mut self) {
        self.keys_held.clear();
    }

    /// Check if a key is currently held.
    pub fn is_held(&self, key: &str) -> bool {
        self.keys_held.contains(&normalize_key(key))
    }

    /// Check if a key was pressed this frame.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys_pressed.contains(&normalize_key(key))
    }

    /// Sample the flight controls.
    pub fn flight_intent(&self) -> FlightIntent {
        FlightIntent {
            forward: self.is_held(keys::FORWARD),
            back: self.is_held(keys::BACK),
            strafe_left: self.is_held(keys::STRAFE_LEFT),
            strafe_right: self.is_held(keys::STRAFE_RIGHT),
            ascend: self.is_held(keys::ASCEND),
            descend: self.is_held(keys::DESCEND),
            yaw_left: self.is_held(keys::YAW_LEFT),
            yaw_right: self.is_held(keys::YAW_RIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut input = InputState::new();
        input.process_key("W", true);
        assert!(input.is_held("w"));
        assert!(input.is_held("W"));
        input.process_key("Shift", true);
        assert!(input.flight_intent().descend);
    }

    #[test]
    fn held_key_persists_across_frames() {
        let mut input = InputState::new();
        input.process_key("a", true);
        for _ in 0..10 {
            input.begin_frame();
            assert!(input.flight_intent().strafe_left);
        }
        input.process_key("a", false);
        assert!(!input.flight_intent().strafe_left);
    }

    #[test]
    fn pressed_is_edge_triggered() {
        let mut input = InputState::new();
        input.process_key("r", true);
        assert!(input.is_pressed(keys::RESTART));
        input.begin_frame();
        assert!(!input.is_pressed(keys::RESTART));
        // Auto-repeat from the host does not count as a fresh press.
        input.process_key("r", true);
        assert!(!input.is_pressed(keys::RESTART));
        input.process_key("r", false);
        assert!(!input.is_held(keys::RESTART));
    }

    #[test]
    fn space_maps_to_ascend() {
        let mut input = InputState::new();
        input.process_key(" ", true);
        let intent = input.flight_intent();
        assert!(intent.ascend);
        assert!(!intent.wants_translation());
    }

    #[test]
    fn release_all_clears_intent() {
        let mut input = InputState::new();
        input.process_key("w", true);
        input.process_key("q", true);
        input.release_all();
        assert_eq!(input.flight_intent(), FlightIntent::default());
        assert!(!input.is_held("w"));
    }
}
