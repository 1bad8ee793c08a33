pub mod app;
pub mod command;
pub mod runner;

pub use app::App;
pub use command::Command;
pub use runner::Runtime;
