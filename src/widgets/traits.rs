use crate::terminal::KeyEvent;
use crate::ui::element::Element;

/// Notifications a widget sends to its owner. Widgets never write the
/// owner's state themselves; the owner decides what a notification means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// Carries the complete new raw value after an edit.
    Changed(String),
    Blurred,
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }
}

/// Word-level edits bound to shortcuts rather than typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

/// A component whose inputs arrive as props on every call.
pub trait Widget {
    type Props<'a>: Copy;

    fn view(&self, props: Self::Props<'_>) -> Element;

    fn on_key(&mut self, key: KeyEvent, props: Self::Props<'_>) -> InteractionResult;

    fn on_text_action(&mut self, _action: TextAction, _props: Self::Props<'_>) -> InteractionResult {
        InteractionResult::ignored()
    }
}
