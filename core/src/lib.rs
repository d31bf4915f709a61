pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod i18n;
pub mod interpreter;
pub mod program;
pub mod render;
pub mod repl;
pub mod speed;
pub mod store;

// Re-export main types
pub use driver::AutoRunDriver;
pub use error::{Error, Result};
pub use i18n::Language;
pub use interpreter::{advance, ExecutionState, Explanation, Line, Step, Transition};
pub use speed::Speed;
pub use store::{ExecutionStateStore, SharedStore};
