use super::types::{InputEvent, Key, KeyState};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, focus).
/// `InputFrame` provides the events received during the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Fresh key presses in arrival order.
    ///
    /// Auto-repeat presses and releases are skipped. A key pressed twice within one
    /// frame yields two entries.
    pub fn key_presses(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => Some(*key),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
