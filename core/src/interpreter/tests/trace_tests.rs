//! Tests for full runs of the program

use super::super::*;
use super::helpers::{full_trace, step_n, visited_lines};

#[test]
fn test_full_run_terminates_with_sum_60() {
    let transitions = full_trace();

    // 2 setup steps, 6 per multiple of 4, 5 for every other value
    assert_eq!(transitions.len(), 2 + 5 * 6 + 15 * 5);

    let last = transitions.last().unwrap();
    assert_eq!(last.step, Step::Done);
    assert_eq!(last.state.current_line, Line::Done);
    assert_eq!(last.state.variables, Variables { sum: 60, i: 21 });
    assert_eq!(last.state.current_iteration, 21);

    // Only the final transition reports Done
    assert!(transitions[..transitions.len() - 1]
        .iter()
        .all(|t| t.step.continues()));
}

#[test]
fn test_run_until_done_matches_trace() {
    let final_state = run_until_done(ExecutionState::initial());
    assert_eq!(final_state, full_trace().pop().unwrap().state);
    assert_eq!(final_state.variables.sum, 60);
}

#[test]
fn test_advance_is_deterministic() {
    let mut state = ExecutionState::initial();
    for t in full_trace() {
        assert_eq!(advance(state.clone()), advance(state.clone()));
        state = t.state;
    }
}

#[test]
fn test_visited_lines_prefix() {
    let lines = visited_lines();

    // i = 1 skips, i = 4 adds
    assert_eq!(&lines[..7], &[-1, 0, 1, 2, 5, 6, 7]);
    let fourth_pass = lines
        .windows(6)
        .position(|w| w == [1, 2, 3, 4, 6, 7])
        .unwrap();
    assert_eq!(fourth_pass, 2 + 3 * 5);
    assert_eq!(*lines.last().unwrap(), 8);
}

#[test]
fn test_counter_is_monotonic_and_moves_only_at_next() {
    let mut previous = ExecutionState::initial();
    for t in full_trace() {
        let before = previous.variables.i;
        let after = t.state.variables.i;
        assert!(after >= before);
        if after != before {
            match previous.current_line {
                Line::AssignSum => assert_eq!(after, 1),
                Line::Next => assert_eq!(after, before + 1),
                other => panic!("i changed leaving line {:?}", other),
            }
        }
        previous = t.state;
    }
}

#[test]
fn test_iteration_tracks_counter_inside_loop() {
    for t in full_trace() {
        if t.state.current_line != Line::AssignSum {
            assert_eq!(t.state.current_iteration as i64, t.state.variables.i);
        }
    }

    let at_twenty = full_trace()
        .into_iter()
        .find(|t| t.state.variables.i == 20 && t.state.current_line == Line::SelectCase)
        .unwrap();
    assert_eq!(at_twenty.state.current_iteration, 20);
}

#[test]
fn test_manual_step_scenario() {
    let first = step_n(1);
    assert_eq!(first.current_line, Line::AssignSum);
    assert_eq!(first.variables.sum, 0);

    let second = step_n(2);
    assert_eq!(second.current_line, Line::ForCheck);
    assert_eq!(second.variables.i, 1);
    assert_eq!(second.current_iteration, 1);

    let last = step_n(107);
    assert_eq!(last.current_line, Line::Done);
    assert_eq!(last.variables.sum, 60);
    assert_eq!(
        last.explanation,
        Some(Explanation::AddBranch {
            i: 20,
            prev_sum: 40,
            new_sum: 60
        })
    );
}

#[test]
fn test_snapshot_serializes_with_display_names() {
    let json = serde_json::to_value(step_n(2)).unwrap();
    assert_eq!(json["currentLine"], 1);
    assert_eq!(json["currentIteration"], 1);
    assert_eq!(json["variables"]["Sum"], 0);
    assert_eq!(json["variables"]["i"], 1);
    assert_eq!(json["explanation"]["key"], "loopEnter");
}
