pub mod field_input;
pub mod submit_button;
pub mod traits;
pub mod validators;

pub use field_input::{FieldInput, FieldProps};
pub use submit_button::{ButtonProps, SubmitButton};
pub use traits::{InteractionResult, TextAction, Widget, WidgetAction};
