use crossterm::event as ct;

/// The keys the form reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1);
    pub const CONTROL: Self = Self(2);
    pub const ALT: Self = Self(4);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<ct::KeyCode> for KeyCode {
    fn from(code: ct::KeyCode) -> Self {
        match code {
            ct::KeyCode::Char(ch) => Self::Char(ch),
            ct::KeyCode::Enter => Self::Enter,
            ct::KeyCode::Tab => Self::Tab,
            ct::KeyCode::BackTab => Self::BackTab,
            ct::KeyCode::Esc => Self::Esc,
            ct::KeyCode::Backspace => Self::Backspace,
            ct::KeyCode::Delete => Self::Delete,
            ct::KeyCode::Home => Self::Home,
            ct::KeyCode::End => Self::End,
            ct::KeyCode::Left => Self::Left,
            ct::KeyCode::Right => Self::Right,
            ct::KeyCode::Up => Self::Up,
            ct::KeyCode::Down => Self::Down,
            _ => Self::Other,
        }
    }
}

impl From<ct::KeyModifiers> for KeyModifiers {
    fn from(modifiers: ct::KeyModifiers) -> Self {
        [
            (ct::KeyModifiers::SHIFT, Self::SHIFT),
            (ct::KeyModifiers::CONTROL, Self::CONTROL),
            (ct::KeyModifiers::ALT, Self::ALT),
        ]
        .into_iter()
        .filter(|(flag, _)| modifiers.contains(*flag))
        .fold(Self::NONE, |acc, (_, ours)| acc.union(ours))
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(key: ct::KeyEvent) -> Self {
        Self::new(key.code.into(), key.modifiers.into())
    }
}
