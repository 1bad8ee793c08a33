use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::element::{Element, Tag};
use crate::widgets::traits::{InteractionResult, TextAction, Widget, WidgetAction};
use crate::widgets::validators::{Predicate, is_blank, is_trim_char, required_message};
use indexmap::IndexMap;

const DEFAULT_ERROR_MESSAGE: &str = "Invalid value";

/// What the owner hands a [`FieldInput`] on every render and event.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldProps<'a> {
    pub value: &'a str,
    pub touched: bool,
    pub focused: bool,
}

/// Labeled single-line text input.
///
/// The input is controlled: its value lives with the owner and comes back in
/// through [`FieldProps`]. Edits are reported as [`WidgetAction::Changed`]
/// with the full new value, and losing focus as [`WidgetAction::Blurred`].
/// Only the caret position is kept here.
pub struct FieldInput {
    name: String,
    label: String,
    placeholder: String,
    required: bool,
    custom_validate: Option<Predicate>,
    error_message: String,
    attrs: IndexMap<String, String>,
    caret: usize,
}

/// A single change to the owner's value at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Insert(char),
    Backspace,
    Delete,
    WordLeft,
    WordRight,
}

impl Edit {
    /// New value and caret, or `None` when the edit changes nothing.
    fn apply(self, value: &str, caret: usize) -> Option<(String, usize)> {
        let mut chars: Vec<char> = value.chars().collect();
        let caret = caret.min(chars.len());
        let (start, end, insert) = match self {
            Self::Insert(ch) => (caret, caret, Some(ch)),
            Self::Backspace => (caret.checked_sub(1)?, caret, None),
            Self::Delete => (caret, (caret + 1).min(chars.len()), None),
            Self::WordLeft => (word_start(&chars, caret), caret, None),
            Self::WordRight => (caret, word_end(&chars, caret), None),
        };
        if start == end && insert.is_none() {
            return None;
        }
        chars.splice(start..end, insert);
        let caret = start + usize::from(insert.is_some());
        Some((chars.into_iter().collect(), caret))
    }
}

impl From<TextAction> for Edit {
    fn from(action: TextAction) -> Self {
        match action {
            TextAction::DeleteWordLeft => Self::WordLeft,
            TextAction::DeleteWordRight => Self::WordRight,
        }
    }
}

// Titles are prose, the other fields are URLs and ids, so URL punctuation
// ends a word as well.
fn breaks_word(ch: char) -> bool {
    is_trim_char(ch) || matches!(ch, '.' | '/' | ':' | '-' | '_' | '?' | '=' | '&' | '#' | ',')
}

fn word_start(chars: &[char], from: usize) -> usize {
    let mut idx = from;
    while idx > 0 && breaks_word(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && !breaks_word(chars[idx - 1]) {
        idx -= 1;
    }
    idx
}

fn word_end(chars: &[char], from: usize) -> usize {
    let mut idx = from;
    while idx < chars.len() && breaks_word(chars[idx]) {
        idx += 1;
    }
    while idx < chars.len() && !breaks_word(chars[idx]) {
        idx += 1;
    }
    idx
}

// AltGr arrives as Ctrl+Alt on Windows, and it types real characters.
fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

impl FieldInput {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            placeholder: format!("Enter {label}"),
            label,
            required: false,
            custom_validate: None,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            attrs: IndexMap::new(),
            caret: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_custom_validation(mut self, predicate: Predicate) -> Self {
        self.custom_validate = Some(predicate);
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Forwards an attribute verbatim onto the rendered input element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn has_required_error(&self, value: &str) -> bool {
        self.required && is_blank(value)
    }

    pub fn has_custom_error(&self, value: &str) -> bool {
        self.custom_validate
            .as_ref()
            .is_some_and(|is_valid| !is_valid(value))
    }

    /// Error for `value` regardless of touched state. The required message
    /// wins over the custom one.
    pub fn error_text(&self, value: &str) -> Option<String> {
        if self.has_required_error(value) {
            return Some(required_message(&self.label));
        }
        if self.has_custom_error(value) {
            return Some(self.error_message.clone());
        }
        None
    }

    pub fn visible_error(&self, props: FieldProps<'_>) -> Option<String> {
        if !props.touched {
            return None;
        }
        self.error_text(props.value)
    }

    /// Caret as a char offset, clamped to the value the owner holds now.
    pub fn caret(&self, value: &str) -> usize {
        self.caret.min(value.chars().count())
    }

    /// Called when the field gains focus; the caret jumps to the end.
    pub fn focus(&mut self, value: &str) {
        self.caret = value.chars().count();
    }

    pub fn blur(&mut self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::Blurred)
    }

    fn edit(&mut self, value: &str, edit: Edit) -> InteractionResult {
        match edit.apply(value, self.caret(value)) {
            Some((next, caret)) => {
                self.caret = caret;
                InteractionResult::with_action(WidgetAction::Changed(next))
            }
            None => InteractionResult::ignored(),
        }
    }

    fn move_caret(&mut self, value: &str, caret: Option<usize>) -> InteractionResult {
        match caret.filter(|caret| *caret <= value.chars().count()) {
            Some(caret) => {
                self.caret = caret;
                InteractionResult::handled()
            }
            None => InteractionResult::ignored(),
        }
    }
}

impl Widget for FieldInput {
    type Props<'a> = FieldProps<'a>;

    fn view(&self, props: FieldProps<'_>) -> Element {
        let error = self.visible_error(props);
        let class = if error.is_some() {
            "input is-danger"
        } else {
            "input"
        };

        let mut input = Element::new(Tag::Input)
            .with_attr("id", self.name.as_str())
            .with_attr("name", self.name.as_str())
            .with_attr("type", "text")
            .with_attr("class", class)
            .with_attr("placeholder", self.placeholder.as_str())
            .with_attr("value", props.value)
            .with_focus(props.focused);
        if self.required {
            input = input.with_attr("aria-required", "true");
        }
        let input = input.with_attrs(&self.attrs);

        let mut field = Element::new(Tag::Field)
            .with_attr("class", "field")
            .with_child(
                Element::new(Tag::Label)
                    .with_attr("class", "label")
                    .with_attr("for", self.name.as_str())
                    .with_text(self.label.as_str()),
            )
            .with_child(input);
        if let Some(error) = error {
            field = field.with_child(
                Element::new(Tag::Help)
                    .with_attr("class", "help is-danger")
                    .with_text(error),
            );
        }
        field
    }

    fn on_key(&mut self, key: KeyEvent, props: FieldProps<'_>) -> InteractionResult {
        let value = props.value;
        let caret = self.caret(value);
        match key.code {
            KeyCode::Char(ch) if !is_shortcut(key.modifiers) => self.edit(value, Edit::Insert(ch)),
            KeyCode::Backspace => self.edit(value, Edit::Backspace),
            KeyCode::Delete => self.edit(value, Edit::Delete),
            KeyCode::Left => self.move_caret(value, caret.checked_sub(1)),
            KeyCode::Right => self.move_caret(value, Some(caret + 1)),
            KeyCode::Home => self.move_caret(value, Some(0)),
            KeyCode::End => self.move_caret(value, Some(value.chars().count())),
            // Enter inside a text field submits the enclosing form.
            KeyCode::Enter => InteractionResult::with_action(WidgetAction::Submit),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_text_action(&mut self, action: TextAction, props: FieldProps<'_>) -> InteractionResult {
        self.edit(props.value, action.into())
    }
}
