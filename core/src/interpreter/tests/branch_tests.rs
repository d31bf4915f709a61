//! Tests for Select Case branch selection over a full run

use super::super::*;
use super::helpers::{full_trace, state_at};
use maplit::hashset;
use std::collections::HashSet;

#[test]
fn test_add_branch_taken_exactly_for_multiples_of_four() {
    let added: HashSet<i64> = full_trace()
        .iter()
        .filter_map(|t| match t.explanation {
            Some(Explanation::AddBranch { i, .. }) => Some(i),
            _ => None,
        })
        .collect();

    assert_eq!(added, hashset! {4, 8, 12, 16, 20});
}

#[test]
fn test_branch_choice_for_every_counter_value() {
    for i in 1..=20 {
        let t = advance(state_at(Line::SelectCase, i, 0, i as u32));
        let expected = if i % 4 == 0 {
            Line::CaseZero
        } else {
            Line::CaseOther
        };
        assert_eq!(t.state.current_line, expected, "i = {}", i);
    }
}

#[test]
fn test_skip_reports_nonzero_remainder() {
    for t in full_trace() {
        if let Some(Explanation::SkipBranch { i, remainder }) = t.explanation {
            assert_eq!(remainder, i % 4);
            assert_ne!(remainder, 0);
        }
    }
}

#[test]
fn test_sum_changes_only_on_add_line() {
    let mut previous = ExecutionState::initial();
    for t in full_trace() {
        if t.state.variables.sum != previous.variables.sum {
            assert_eq!(previous.current_line, Line::AddToSum);
            assert_eq!(
                t.state.variables.sum,
                previous.variables.sum + previous.variables.i
            );
        }
        previous = t.state;
    }
}
