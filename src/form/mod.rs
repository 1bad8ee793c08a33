pub mod field;
pub mod focus;
pub mod movie_form;
pub mod record;
pub mod rules;
pub mod touched;
pub mod values;

pub use field::FieldName;
pub use focus::FocusTarget;
pub use movie_form::{FormUpdate, MovieForm, OnAdd, SubmitOutcome};
pub use record::MovieRecord;
pub use touched::TouchedFlags;
pub use values::FieldValues;
