//! Test helpers for interpreter tests
//!
//! Common utilities for building snapshots and walking the program

use crate::interpreter::{advance, trace, ExecutionState, Line, Transition, Variables};

/// Build a snapshot positioned on `line` with the given variables
pub fn state_at(line: Line, i: i64, sum: i64, iteration: u32) -> ExecutionState {
    ExecutionState {
        current_line: line,
        current_iteration: iteration,
        variables: Variables { sum, i },
        ..ExecutionState::initial()
    }
}

/// Apply `advance` `n` times starting from the initial snapshot
pub fn step_n(n: usize) -> ExecutionState {
    let mut state = ExecutionState::initial();
    for _ in 0..n {
        state = advance(state).state;
    }
    state
}

/// Every transition of a full run from the initial snapshot
pub fn full_trace() -> Vec<Transition> {
    trace(ExecutionState::initial())
}

/// Sequence of line indices visited, starting with the initial line
pub fn visited_lines() -> Vec<i64> {
    std::iter::once(Line::NotStarted.index())
        .chain(full_trace().iter().map(|t| t.state.current_line.index()))
        .collect()
}
