pub mod element;
pub mod renderer;
pub mod span;
