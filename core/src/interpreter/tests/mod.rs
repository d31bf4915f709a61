//! Tests for the step interpreter
//!
//! Organized by feature area

mod branch_tests;
mod helpers;
mod trace_tests;
