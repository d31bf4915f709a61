//! # Step Interpreter
//!
//! A finite-state machine over the fixed program in [`crate::program`].
//!
//! ## Core Principles
//!
//! 1. **Snapshot in, snapshot out**: `advance` takes an `ExecutionState` by
//!    value and returns the next one. No store, no clock, no async.
//! 2. **One line per call**: each call moves the program counter exactly once.
//! 3. **Keys, not text**: transitions carry an `Explanation` key with numbers;
//!    wording is chosen by the presentation layer.

pub mod exec_loop;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use exec_loop::{advance, run_until_done, trace};
pub use types::{ExecutionState, Explanation, Line, Step, Transition, Variable, Variables};
