use raylib::prelude::*;
use tracing::debug;

use crate::state::{Event, PresentationState};

/// Keys the presentation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

impl Key {
    pub fn from_raylib(key: KeyboardKey) -> Option<Self> {
        match key {
            KeyboardKey::KEY_LEFT => Some(Key::ArrowLeft),
            KeyboardKey::KEY_RIGHT => Some(Key::ArrowRight),
            KeyboardKey::KEY_SPACE => Some(Key::Space),
            KeyboardKey::KEY_ESCAPE => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Maps a key press to an event, depending on the current mode.
pub fn route(state: &PresentationState, key: Key) -> Option<Event> {
    if state.is_welcome_shown {
        return None;
    }
    if state.is_fullscreen_shown() {
        return (key == Key::Escape).then_some(Event::CloseFullscreen);
    }
    match key {
        Key::ArrowLeft => Some(Event::Retreat),
        Key::ArrowRight => Some(Event::Advance),
        Key::Space => Some(Event::TogglePlayback),
        Key::Escape => None,
    }
}

/// Window-level keyboard subscription, held for the presenter's lifetime.
///
/// Attaching takes Escape away from raylib (which would otherwise close the
/// window) so the fullscreen overlay can use it.
pub struct KeyboardListener {
    attached: bool,
}

impl KeyboardListener {
    pub fn attach(rl: &mut RaylibHandle) -> Self {
        rl.set_exit_key(None);
        debug!("keyboard listener attached");
        Self { attached: true }
    }

    /// Drains this frame's key presses in the order they arrived.
    pub fn drain(&self, rl: &mut RaylibHandle) -> Vec<Key> {
        let mut keys = Vec::new();
        if !self.attached {
            return keys;
        }
        while let Some(pressed) = rl.get_key_pressed() {
            if let Some(key) = Key::from_raylib(pressed) {
                keys.push(key);
            }
        }
        keys
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            debug!("keyboard listener detached");
        }
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow() -> PresentationState {
        PresentationState::new(64).apply(Event::Start)
    }

    #[test]
    fn welcome_ignores_every_key() {
        let state = PresentationState::new(64);
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Space, Key::Escape] {
            assert_eq!(route(&state, key), None);
        }
    }

    #[test]
    fn slideshow_keys() {
        let state = slideshow();
        assert_eq!(route(&state, Key::ArrowLeft), Some(Event::Retreat));
        assert_eq!(route(&state, Key::ArrowRight), Some(Event::Advance));
        assert_eq!(route(&state, Key::Space), Some(Event::TogglePlayback));
        assert_eq!(route(&state, Key::Escape), None);
    }

    #[test]
    fn fullscreen_only_handles_escape() {
        let state = slideshow().apply(Event::OpenFullscreen);
        assert_eq!(route(&state, Key::Escape), Some(Event::CloseFullscreen));
        assert_eq!(route(&state, Key::ArrowLeft), None);
        assert_eq!(route(&state, Key::ArrowRight), None);
        assert_eq!(route(&state, Key::Space), None);
    }

    #[test]
    fn leaving_welcome_reenables_keys() {
        let state = PresentationState::new(64);
        assert_eq!(route(&state, Key::ArrowRight), None);
        let state = state.apply(Event::Start);
        assert_eq!(route(&state, Key::ArrowRight), Some(Event::Advance));
        let state = state.apply(Event::ShowWelcome);
        assert_eq!(route(&state, Key::ArrowRight), None);
    }

    #[test]
    fn unrelated_raylib_keys_are_dropped() {
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_A), None);
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_ENTER), None);
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_SPACE), Some(Key::Space));
    }
}
