pub mod backend;
pub mod keys;

pub use backend::{CursorPos, RenderMode, Terminal, TerminalEvent, TerminalSize};
pub use keys::{KeyCode, KeyEvent, KeyModifiers};
