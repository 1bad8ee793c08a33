use crate::form::field::FieldName;
use crate::form::focus::{FORM_TEST_ID, FocusState, FocusTarget, SUBMIT_TEST_ID};
use crate::form::record::MovieRecord;
use crate::form::rules::{self, INVALID_URL_MESSAGE};
use crate::form::touched::TouchedFlags;
use crate::form::values::FieldValues;
use crate::runtime::command::Command;
use crate::ui::element::{Element, Tag, TEST_ID_ATTR};
use crate::widgets::{
    ButtonProps, FieldInput, FieldProps, InteractionResult, SubmitButton, Widget, WidgetAction,
};

pub const DEFAULT_HEADING: &str = "Add a new movie";
pub const DEFAULT_SUBMIT_LABEL: &str = "Add Movie";

pub type OnAdd = Box<dyn FnMut(MovieRecord) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record went to `on_add` and the form was cleared.
    Added,
    /// The form was invalid; nothing changed.
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub render: bool,
    pub outcome: Option<SubmitOutcome>,
}

impl FormUpdate {
    fn render() -> Self {
        Self {
            render: true,
            outcome: None,
        }
    }
}

/// The "new movie" form.
///
/// Owns the five field values and their touched flags; the [`FieldInput`]s
/// only ever see them as props. Validity is recomputed from the values on
/// every query and never stored.
pub struct MovieForm {
    heading: String,
    values: FieldValues,
    touched: TouchedFlags,
    inputs: Vec<FieldInput>,
    submit: SubmitButton,
    focus: FocusState,
    on_add: OnAdd,
}

impl MovieForm {
    pub fn new(on_add: impl FnMut(MovieRecord) + Send + 'static) -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            values: FieldValues::default(),
            touched: TouchedFlags::default(),
            inputs: FieldName::ALL.into_iter().map(build_input).collect(),
            submit: build_submit(DEFAULT_SUBMIT_LABEL),
            focus: FocusState::default(),
            on_add: Box::new(on_add),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit = build_submit(label);
        self
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn touched(&self, field: FieldName) -> bool {
        self.touched.get(field)
    }

    pub fn touched_flags(&self) -> TouchedFlags {
        self.touched
    }

    pub fn input(&self, field: FieldName) -> &FieldInput {
        &self.inputs[field.index()]
    }

    /// Change notification from a field: stores the new raw value.
    pub fn change(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Blur notification from a field: marks only that field touched.
    pub fn blur(&mut self, field: FieldName) {
        if !self.touched.get(field) {
            tracing::debug!(%field, "field touched");
        }
        self.touched.mark(field);
    }

    pub fn is_valid(&self) -> bool {
        rules::form_is_valid(&self.values)
    }

    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    pub fn visible_error(&self, field: FieldName) -> Option<String> {
        self.input(field).visible_error(self.field_props(field))
    }

    /// Validates again, emits the trimmed record and clears the form.
    /// An invalid form is left exactly as it was.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_valid() {
            tracing::debug!("submit rejected, form invalid");
            return SubmitOutcome::Rejected;
        }

        let record = self.values.to_record();
        tracing::info!(title = %record.title, imdb_id = %record.imdb_id, "movie added");
        (self.on_add)(record);
        self.reset();

        // Back to the first field without blur notifications, so the cleared
        // form starts untouched.
        self.focus = FocusState::default();
        self.inputs[FieldName::Title.index()].focus("");
        SubmitOutcome::Added
    }

    pub fn reset(&mut self) {
        tracing::debug!(touched = self.touched.any(), "form reset");
        self.values.clear();
        self.touched.reset();
    }

    pub fn focused(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn focus(&mut self, target: FocusTarget) {
        self.move_focus(|focus| {
            focus.set(target);
        });
    }

    /// Focuses the element carrying `data-cy="<id>"`.
    pub fn focus_by_test_id(&mut self, id: &str) -> bool {
        match FocusTarget::from_test_id(id) {
            Some(target) => {
                self.focus(target);
                true
            }
            None => false,
        }
    }

    /// Caret offset inside the focused field, if a field has focus.
    pub fn caret(&self) -> Option<usize> {
        let field = self.focused().field()?;
        Some(self.input(field).caret(self.value(field)))
    }

    pub fn view(&self) -> Element {
        let mut form = Element::new(Tag::Form)
            .with_attr("class", "new-movie")
            .with_attr(TEST_ID_ATTR, FORM_TEST_ID)
            .with_child(
                Element::new(Tag::Heading)
                    .with_attr("class", "new-movie__title")
                    .with_text(self.heading.as_str()),
            );
        for field in FieldName::ALL {
            form = form.with_child(self.input(field).view(self.field_props(field)));
        }
        form.with_child(self.submit.view(self.button_props()))
    }

    pub fn handle_command(&mut self, command: Command) -> FormUpdate {
        match command {
            Command::NextFocus => {
                self.move_focus(FocusState::next);
                FormUpdate::render()
            }
            Command::PrevFocus => {
                self.move_focus(FocusState::prev);
                FormUpdate::render()
            }
            Command::Submit => FormUpdate {
                render: true,
                outcome: Some(self.submit()),
            },
            Command::InputKey(key) => match self.focused() {
                FocusTarget::Field(field) => {
                    let props = props_for(&self.values, self.touched, &self.focus, field);
                    let result = self.inputs[field.index()].on_key(key, props);
                    self.apply(Some(field), result)
                }
                FocusTarget::Submit => {
                    let props = self.button_props();
                    let result = self.submit.on_key(key, props);
                    self.apply(None, result)
                }
            },
            Command::TextAction(action) => match self.focused() {
                FocusTarget::Field(field) => {
                    let props = props_for(&self.values, self.touched, &self.focus, field);
                    let result = self.inputs[field.index()].on_text_action(action, props);
                    self.apply(Some(field), result)
                }
                FocusTarget::Submit => FormUpdate::default(),
            },
            Command::Exit => FormUpdate::default(),
        }
    }

    fn field_props(&self, field: FieldName) -> FieldProps<'_> {
        props_for(&self.values, self.touched, &self.focus, field)
    }

    fn button_props(&self) -> ButtonProps {
        ButtonProps {
            enabled: self.submit_enabled(),
            focused: self.focus.is_focused(FocusTarget::Submit),
        }
    }

    fn move_focus(&mut self, step: impl FnOnce(&mut FocusState)) {
        let from = self.focus.current();
        step(&mut self.focus);
        let to = self.focus.current();
        if from == to {
            return;
        }
        tracing::debug!(from = from.test_id(), to = to.test_id(), "focus moved");

        if let Some(field) = from.field() {
            let result = self.inputs[field.index()].blur();
            self.apply(Some(field), result);
        }
        if let Some(field) = to.field() {
            let value = self.values.get(field);
            self.inputs[field.index()].focus(value);
        }
    }

    fn apply(&mut self, source: Option<FieldName>, result: InteractionResult) -> FormUpdate {
        let mut update = FormUpdate {
            render: result.request_render,
            outcome: None,
        };
        for action in result.actions {
            match (action, source) {
                (WidgetAction::Changed(value), Some(field)) => self.change(field, value),
                (WidgetAction::Blurred, Some(field)) => self.blur(field),
                (WidgetAction::Submit, _) => update.outcome = Some(self.submit()),
                _ => {}
            }
        }
        update
    }
}

// Borrows only the values, so the caller can still reach the inputs mutably.
fn props_for<'a>(
    values: &'a FieldValues,
    touched: TouchedFlags,
    focus: &FocusState,
    field: FieldName,
) -> FieldProps<'a> {
    FieldProps {
        value: values.get(field),
        touched: touched.get(field),
        focused: focus.is_focused(FocusTarget::Field(field)),
    }
}

fn build_input(field: FieldName) -> FieldInput {
    let input = FieldInput::new(field.key(), field.label()).with_attr(TEST_ID_ATTR, field.test_id());
    match field {
        FieldName::Title | FieldName::ImdbId => input.required(),
        FieldName::Description => input,
        FieldName::ImgUrl | FieldName::ImdbUrl => input
            .required()
            .with_custom_validation(rules::url_predicate())
            .with_error_message(INVALID_URL_MESSAGE),
    }
}

fn build_submit(label: impl Into<String>) -> SubmitButton {
    SubmitButton::new(label)
        .with_attr("class", "new-movie__submit")
        .with_attr(TEST_ID_ATTR, SUBMIT_TEST_ID)
}
