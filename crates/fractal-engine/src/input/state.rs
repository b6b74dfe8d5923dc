use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for the window.
///
/// Holds "is down" information; every applied event is also recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events never arrive for keys held while focus moves away.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        self.keys_down.insert(*key);
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::key_pressed(Key::ArrowUp));
        assert!(state.key_down(Key::ArrowUp));
        assert_eq!(frame.key_presses().collect::<Vec<_>>(), vec![Key::ArrowUp]);

        frame.clear();
        state.apply_event(&mut frame, InputEvent::key_released(Key::ArrowUp));
        assert!(!state.key_down(Key::ArrowUp));
        assert_eq!(frame.events, vec![InputEvent::key_released(Key::ArrowUp)]);
        assert_eq!(frame.key_presses().count(), 0);
    }

    #[test]
    fn every_event_is_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::key_pressed(Key::Space));
        frame.clear();
        state.apply_event(&mut frame, InputEvent::key_pressed(Key::Space));
        assert!(state.key_down(Key::Space));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, InputEvent::key_pressed(Key::S));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn modifiers_follow_events() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Default::default() };

        state.apply_event(&mut frame, InputEvent::ModifiersChanged(shift));
        assert_eq!(state.modifiers, shift);
    }
}
