use fractal_engine::input::Key;
use fractal_geometry::FigureKind;

use crate::state::ViewerCommand;

/// Maps a fresh key press to a viewer command.
///
/// Digits select figures by their 1-based position in the cycling order.
pub fn command_for(key: Key) -> Option<ViewerCommand> {
    let cmd = match key {
        Key::Escape | Key::Q => ViewerCommand::Quit,
        Key::S => ViewerCommand::Start,
        Key::ArrowRight => ViewerCommand::Next,
        Key::ArrowLeft => ViewerCommand::Prev,
        Key::ArrowUp => ViewerCommand::LevelUp,
        Key::ArrowDown => ViewerCommand::LevelDown,
        Key::Space => ViewerCommand::ToggleAnimation,
        other => {
            let digit = other.digit()?;
            let index = usize::from(digit).checked_sub(1)?;
            ViewerCommand::Select(FigureKind::from_index(index)?)
        }
    };
    Some(cmd)
}
