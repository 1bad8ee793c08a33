use crate::terminal::CursorPos;
use crate::ui::element::{Element, Tag};
use crate::ui::span::{Span, SpanLine, Tone};
use unicode_width::UnicodeWidthChar;

const INPUT_INDENT: &str = "    ";
const HINT: &str = "tab/↓ next · shift+tab/↑ prev · enter submit · esc quit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    show_hint: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_hint(mut self) -> Self {
        self.show_hint = false;
        self
    }

    /// Lays the element tree out as terminal lines. `caret` is the char
    /// offset inside the focused input, used to place the terminal cursor.
    pub fn render(&self, view: &Element, caret: Option<usize>) -> RenderFrame {
        let mut frame = RenderFrame::default();
        self.draw_element(view, caret, &mut frame);
        if self.show_hint {
            frame.lines.push(Vec::new());
            frame.lines.push(vec![Span::toned(HINT, Tone::Muted)]);
        }
        frame
    }

    fn draw_element(&self, el: &Element, caret: Option<usize>, frame: &mut RenderFrame) {
        match el.tag {
            Tag::Form => {
                for child in &el.children {
                    self.draw_element(child, caret, frame);
                }
            }
            Tag::Heading => {
                frame.lines.push(vec![Span::toned(el.text(), Tone::Heading)]);
                frame.lines.push(Vec::new());
            }
            Tag::Field => {
                let focused = el.children.iter().any(|child| child.focused);
                let required = el
                    .children
                    .iter()
                    .any(|child| child.tag == Tag::Input && child.has_attr("aria-required"));
                for child in &el.children {
                    match child.tag {
                        Tag::Label => frame.lines.push(draw_label(child, focused, required)),
                        _ => self.draw_element(child, caret, frame),
                    }
                }
                frame.lines.push(Vec::new());
            }
            Tag::Label => frame.lines.push(draw_label(el, el.focused, false)),
            Tag::Input => {
                let row = frame.lines.len() as u16;
                frame.lines.push(draw_input(el));
                if el.focused {
                    let value = el.attr("value").unwrap_or("");
                    let col = INPUT_INDENT.len() + display_width(value, caret.unwrap_or(0));
                    frame.cursor = Some(CursorPos {
                        col: col.min(u16::MAX as usize) as u16,
                        row,
                    });
                }
            }
            Tag::Help => {
                frame.lines.push(vec![
                    Span::plain(INPUT_INDENT),
                    Span::toned(el.text(), Tone::Error),
                ]);
            }
            Tag::Button => frame.lines.push(draw_button(el)),
        }
    }
}

fn draw_label(el: &Element, focused: bool, required: bool) -> SpanLine {
    let marker = if focused { "> " } else { "  " };
    let tone = if focused { Tone::FocusedLabel } else { Tone::Plain };
    let mut line = vec![Span::toned(format!("{marker}{}", el.text()), tone)];
    if required {
        line.push(Span::toned(" *", Tone::Muted));
    }
    line
}

fn draw_input(el: &Element) -> SpanLine {
    let value = el.attr("value").unwrap_or("");
    let danger = el.has_class("is-danger");
    let body = if value.is_empty() {
        Span::toned(el.attr("placeholder").unwrap_or(""), Tone::Muted)
    } else if danger {
        Span::toned(value, Tone::Error)
    } else {
        Span::plain(value)
    };
    vec![Span::plain(INPUT_INDENT), body]
}

fn draw_button(el: &Element) -> SpanLine {
    let disabled = el.has_attr("disabled");
    let marker = if el.focused { "> " } else { "  " };
    let tone = match (el.focused, disabled) {
        (_, true) => Tone::ButtonDisabled,
        (true, false) => Tone::ButtonFocused,
        (false, false) => Tone::ButtonReady,
    };
    vec![
        Span::plain(marker),
        Span::toned(format!("[ {} ]", el.text()), tone),
    ]
}

fn display_width(value: &str, chars: usize) -> usize {
    value
        .chars()
        .take(chars)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}
