//! Type definitions for the step interpreter
//!
//! - Program counter (`Line`)
//! - Snapshot values (`ExecutionState`, `Variables`)
//! - Explanation keys (`Explanation`)
//! - Step results (`Step`, `Transition`)

pub mod explanation;
pub mod line;
pub mod state;
pub mod step;

pub use explanation::Explanation;
pub use line::Line;
pub use state::{ExecutionState, Variable, Variables};
pub use step::{Step, Transition};
