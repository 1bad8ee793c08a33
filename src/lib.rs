pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod output;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use error::{Error, Result};
pub use form::{FieldName, MovieForm, MovieRecord, SubmitOutcome};
