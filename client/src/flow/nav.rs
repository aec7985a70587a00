use super::Panel;
use crate::ui::context::FrameInput;
use macroquad::prelude::{KeyCode, Rect};

/// A navigation request raised by input, chrome or a panel, applied to the
/// stack by the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Open fresh with this panel as root.
    Open(Panel),
    Push(Panel),
    Back,
    /// Back to the root panel.
    Reset,
    Close,
    /// Resume the history retained by the last close.
    Reopen,
    /// Finish the create flow.
    CreateWorkspace { name: String, template: String },
    /// Make an existing workspace active and dismiss the picker.
    SelectWorkspace(String),
    /// Turn the slide between screens on or off.
    SetSlides(bool),
}

/// Map this frame's keyboard and mouse input to a command.
///
/// `stack_area` is where the open stack is drawn; a click outside it
/// dismisses the stack. Escape always closes, Backspace goes back, Home
/// resets, and O resumes a closed stack.
pub fn command_for_input(input: &FrameInput, is_open: bool, stack_area: Rect) -> Option<NavCommand> {
    if is_open {
        if input.key_pressed(KeyCode::Escape) {
            return Some(NavCommand::Close);
        }
        if input.key_pressed(KeyCode::Backspace) {
            return Some(NavCommand::Back);
        }
        if input.key_pressed(KeyCode::Home) {
            return Some(NavCommand::Reset);
        }
        if let Some(pos) = input.click_pos() {
            if !stack_area.contains(pos) {
                return Some(NavCommand::Close);
            }
        }
        None
    } else if input.key_pressed(KeyCode::O) {
        Some(NavCommand::Reopen)
    } else {
        None
    }
}
