use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::element::{Element, Tag};
use crate::widgets::traits::{InteractionResult, Widget, WidgetAction};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonProps {
    pub enabled: bool,
    pub focused: bool,
}

pub struct SubmitButton {
    text: String,
    attrs: IndexMap<String, String>,
}

impl SubmitButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: IndexMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

impl Widget for SubmitButton {
    type Props<'a> = ButtonProps;

    fn view(&self, props: ButtonProps) -> Element {
        let mut button = Element::new(Tag::Button)
            .with_attr("type", "submit")
            .with_attrs(&self.attrs)
            .with_text(self.text.as_str())
            .with_focus(props.focused);
        if !props.enabled {
            button = button.with_attr("disabled", "");
        }
        button
    }

    fn on_key(&mut self, key: KeyEvent, props: ButtonProps) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if props.enabled => {
                InteractionResult::with_action(WidgetAction::Submit)
            }
            _ => InteractionResult::ignored(),
        }
    }
}
