use crate::terminal::keys::KeyEvent;
use crate::ui::renderer::RenderFrame;
use crate::ui::span::{SpanLine, Tone};
use crossterm::cursor::{Hide, MoveTo, Show, position};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{ContentStyle, PrintStyledContent, Stylize};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen, ScrollUp,
};
use crossterm::{execute, queue};
use serde::Deserialize;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    AltScreen,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(TerminalSize),
    /// Nothing arrived before the poll timeout.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

/// Draws the form either on the alternate screen or in place below the
/// shell prompt. Both modes share one draw path; they differ only in the
/// row the form starts on.
pub struct Terminal {
    out: Stdout,
    size: TerminalSize,
    mode: RenderMode,
    origin: u16,
    drawn_rows: u16,
    last_frame: Vec<SpanLine>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            size: TerminalSize { width, height },
            mode: RenderMode::default(),
            origin: 0,
            drawn_rows: 0,
            last_frame: Vec::new(),
        })
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
        self.origin = self.origin.min(size.height.saturating_sub(1));
    }

    pub fn enter(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.set_size(TerminalSize { width, height });
        tracing::debug!(mode = ?self.mode, width, height, "entering terminal");
        terminal::enable_raw_mode()?;
        match self.mode {
            RenderMode::AltScreen => {
                self.origin = 0;
                execute!(self.out, EnterAlternateScreen, Hide)
            }
            RenderMode::Inline => {
                let (_, row) = position()?;
                self.set_origin(row);
                execute!(self.out, Hide)
            }
        }
    }

    /// Restores the terminal and leaves the final form on the main screen.
    pub fn exit(&mut self) -> io::Result<()> {
        tracing::debug!(mode = ?self.mode, "leaving terminal");
        terminal::disable_raw_mode()?;
        match self.mode {
            RenderMode::AltScreen => {
                execute!(self.out, LeaveAlternateScreen)?;
                let width = self.size.width;
                for line in std::mem::take(&mut self.last_frame) {
                    self.write_line(&line, width)?;
                    self.out.write_all(b"\r\n")?;
                }
            }
            RenderMode::Inline => {
                let below = self.origin.saturating_add(self.drawn_rows);
                queue!(self.out, MoveTo(0, below.min(self.size.height.saturating_sub(1))))?;
                self.out.write_all(b"\r\n")?;
            }
        }
        execute!(self.out, Show)
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Idle);
        }
        Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => TerminalEvent::Key(key.into()),
            Event::Resize(width, height) => TerminalEvent::Resize(TerminalSize { width, height }),
            _ => TerminalEvent::Idle,
        })
    }

    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        self.last_frame.clone_from(&frame.lines);
        let TerminalSize { width, height } = self.size;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let rows = visible_rows(frame.lines.len(), height);
        queue!(self.out, BeginSynchronizedUpdate)?;
        let overflow = self.origin.saturating_add(rows).saturating_sub(height);
        if overflow > 0 {
            // Inline form ran past the bottom: push the scrollback up.
            queue!(self.out, ScrollUp(overflow))?;
            self.origin -= overflow;
        }
        queue!(self.out, MoveTo(0, self.origin), Clear(ClearType::FromCursorDown))?;

        let first = first_visible_line(frame, rows);
        for (row, line) in frame.lines.iter().skip(first).take(usize::from(rows)).enumerate() {
            queue!(self.out, MoveTo(0, self.origin + row as u16))?;
            self.write_line(line, width)?;
        }
        self.drawn_rows = rows;

        match frame.cursor.and_then(|cursor| on_screen(cursor, first, rows)) {
            Some(CursorPos { col, row }) => {
                let col = col.min(width.saturating_sub(1));
                queue!(self.out, MoveTo(col, self.origin + row), Show)?;
            }
            None => queue!(self.out, Hide)?,
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }

    fn set_origin(&mut self, row: u16) {
        self.origin = row.min(self.size.height.saturating_sub(1));
        self.drawn_rows = 0;
    }

    fn write_line(&mut self, line: &SpanLine, width: u16) -> io::Result<()> {
        // Leave the last column free so the terminal never wraps.
        let mut budget = usize::from(width.saturating_sub(1).max(1));
        for span in line {
            let (text, used) = clip(&span.text, budget);
            if !text.is_empty() {
                queue!(self.out, PrintStyledContent(tone_style(span.tone).apply(text)))?;
            }
            budget -= used;
            if budget == 0 {
                break;
            }
        }
        Ok(())
    }
}

fn visible_rows(lines: usize, height: u16) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).min(height)
}

/// Index of the first frame line drawn, chosen so the cursor row fits.
fn first_visible_line(frame: &RenderFrame, rows: u16) -> usize {
    let rows = usize::from(rows);
    let last_start = frame.lines.len().saturating_sub(rows);
    frame
        .cursor
        .map_or(0, |cursor| (usize::from(cursor.row) + 1).saturating_sub(rows))
        .min(last_start)
}

fn on_screen(cursor: CursorPos, first: usize, rows: u16) -> Option<CursorPos> {
    let row = usize::from(cursor.row).checked_sub(first)?;
    (row < usize::from(rows)).then_some(CursorPos {
        col: cursor.col,
        row: row as u16,
    })
}

/// Longest prefix of `text` fitting in `budget` columns, and its width.
/// Line breaks inside a span are not drawn.
fn clip(text: &str, budget: usize) -> (String, usize) {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| *ch != '\n' && *ch != '\r') {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    (out, used)
}

fn tone_style(tone: Tone) -> ContentStyle {
    let style = ContentStyle::new();
    match tone {
        Tone::Plain => style,
        Tone::Heading | Tone::FocusedLabel => style.dark_cyan().bold(),
        Tone::Muted | Tone::ButtonDisabled => style.dark_grey(),
        Tone::Error => style.red(),
        Tone::ButtonReady => style.green(),
        Tone::ButtonFocused => style.white().on_dark_blue().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CursorPos, clip, first_visible_line, on_screen, visible_rows};
    use crate::ui::renderer::RenderFrame;

    fn frame(lines: usize, cursor_row: Option<u16>) -> RenderFrame {
        RenderFrame {
            lines: vec![Vec::new(); lines],
            cursor: cursor_row.map(|row| CursorPos { col: 0, row }),
        }
    }

    #[test]
    fn clip_counts_display_columns() {
        assert_eq!(clip("hello", 3), ("hel".to_string(), 3));
        assert_eq!(clip("日本語", 5), ("日本".to_string(), 4));
        assert_eq!(clip("a\nb", 5), ("ab".to_string(), 2));
    }

    #[test]
    fn short_terminal_keeps_cursor_row_visible() {
        let rows = visible_rows(30, 10);
        assert_eq!(rows, 10);
        let first = first_visible_line(&frame(30, Some(25)), rows);
        assert_eq!(first, 16);
        assert_eq!(
            on_screen(CursorPos { col: 4, row: 25 }, first, rows),
            Some(CursorPos { col: 4, row: 9 })
        );
        assert_eq!(first_visible_line(&frame(30, Some(2)), rows), 0);
        assert_eq!(first_visible_line(&frame(30, None), rows), 0);
    }

    #[test]
    fn cursor_above_window_is_hidden() {
        assert_eq!(on_screen(CursorPos { col: 0, row: 3 }, 5, 10), None);
        assert_eq!(on_screen(CursorPos { col: 0, row: 20 }, 5, 10), None);
    }

    #[test]
    fn tall_terminal_draws_whole_frame() {
        assert_eq!(visible_rows(18, 40), 18);
        assert_eq!(first_visible_line(&frame(18, Some(17)), 18), 0);
    }
}
