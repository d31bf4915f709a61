//! Core execution loop
//!
//! `advance()` is the whole interpreter: one match over the program counter,
//! one transition per call. It reads nothing but its argument, so the same
//! snapshot always produces the same transition.
//!
//! ## Function Organization
//! 1. run_until_done() / trace() - Drivers (call advance repeatedly)
//! 2. advance() - One step of the state machine

use tracing::warn;

use super::types::{ExecutionState, Explanation, Line, Step, Transition};
use crate::program::{DIVISOR, LOOP_END, LOOP_START};

/* ===================== Public API ===================== */

/// Advance until the loop exits and return the final state
pub fn run_until_done(mut state: ExecutionState) -> ExecutionState {
    loop {
        let transition = advance(state);
        state = transition.state;
        if !transition.step.continues() {
            return state;
        }
    }
}

/// Advance until the loop exits, keeping every transition
pub fn trace(mut state: ExecutionState) -> Vec<Transition> {
    let mut transitions = Vec::new();
    loop {
        let transition = advance(state.clone());
        state = transition.state.clone();
        let done = !transition.step.continues();
        transitions.push(transition);
        if done {
            return transitions;
        }
    }
}

/// Execute one line of the program
///
/// Takes the snapshot by value and returns the next one. The `For` test is
/// evaluated twice: once at line 1 on entry and again at `Next`, after the
/// counter has been incremented.
pub fn advance(mut state: ExecutionState) -> Transition {
    let from = state.current_line;
    let sum = state.variables.sum;
    let i = state.variables.i;

    let (next, explanation, step) = match from {
        Line::NotStarted => {
            state.variables.sum = 0;
            (Line::AssignSum, Some(Explanation::Init), Step::Continue)
        }

        Line::AssignSum => {
            state.variables.i = LOOP_START;
            state.current_iteration = 1;
            (
                Line::ForCheck,
                Some(Explanation::LoopEnter { i: LOOP_START }),
                Step::Continue,
            )
        }

        Line::ForCheck if i <= LOOP_END => (
            Line::SelectCase,
            Some(Explanation::CheckMod {
                i,
                remainder: remainder(i),
            }),
            Step::Continue,
        ),

        Line::ForCheck => (Line::Done, None, Step::Done),

        Line::SelectCase if remainder(i) == 0 => (Line::CaseZero, None, Step::Continue),

        Line::SelectCase => (Line::CaseOther, None, Step::Continue),

        Line::CaseZero => (Line::AddToSum, None, Step::Continue),

        Line::AddToSum => {
            let new_sum = sum.saturating_add(i);
            state.variables.sum = new_sum;
            (
                Line::EndSelect,
                Some(Explanation::AddBranch {
                    i,
                    prev_sum: sum,
                    new_sum,
                }),
                Step::Continue,
            )
        }

        Line::CaseOther => (
            Line::EndSelect,
            Some(Explanation::SkipBranch {
                i,
                remainder: remainder(i),
            }),
            Step::Continue,
        ),

        Line::EndSelect => (Line::Next, None, Step::Continue),

        Line::Next => {
            let next_i = i.saturating_add(1);
            state.variables.i = next_i;
            state.current_iteration = state.current_iteration.saturating_add(1);
            if next_i <= LOOP_END {
                (
                    Line::ForCheck,
                    Some(Explanation::LoopEnter { i: next_i }),
                    Step::Continue,
                )
            } else {
                (Line::Done, None, Step::Done)
            }
        }

        // Nothing left to run; callers should have stopped at the previous Done
        Line::Done => {
            warn!("advance called on a finished program");
            return Transition {
                state,
                explanation: None,
                step: Step::Done,
            };
        }
    };

    state.current_line = next;
    if explanation.is_some() {
        state.explanation = explanation;
    }

    tracing::trace!(
        from = from.index(),
        to = next.index(),
        sum = state.variables.sum,
        i = state.variables.i,
        iteration = state.current_iteration,
        ?explanation,
        "advance"
    );

    Transition {
        state,
        explanation,
        step,
    }
}

fn remainder(i: i64) -> i64 {
    i.rem_euclid(DIVISOR)
}
