use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widgets::traits::TextAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Submit,
    NextFocus,
    PrevFocus,
    InputKey(KeyEvent),
    TextAction(TextAction),
}

impl Command {
    /// Form-wide shortcuts. Anything else goes to the focused control as
    /// [`Command::InputKey`].
    pub fn shortcut(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        let command = match (key.code, ctrl) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), true) => Self::Exit,
            (KeyCode::Char('s'), true) => Self::Submit,
            (KeyCode::Tab | KeyCode::Down, false) => Self::NextFocus,
            (KeyCode::BackTab | KeyCode::Up, false) => Self::PrevFocus,
            (KeyCode::Backspace, true) | (KeyCode::Char('w'), true) => {
                Self::TextAction(TextAction::DeleteWordLeft)
            }
            (KeyCode::Delete, true) => Self::TextAction(TextAction::DeleteWordRight),
            _ => return None,
        };
        Some(command)
    }

    pub fn from_key(key: KeyEvent) -> Self {
        Self::shortcut(key).unwrap_or(Self::InputKey(key))
    }
}
