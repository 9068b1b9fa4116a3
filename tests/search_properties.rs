// Property checks for the search engine across a sweep of array sizes

use bisectty::search::engine::{
    initialize, run_to_completion, step, theoretical_step_bound, StepOutcome,
};
use bisectty::search::state::SearchState;

/// Comma-separated ascending array of `len` even values: 0, 2, 4, ...
fn even_array_text(len: usize) -> String {
    (0..len)
        .map(|i| (i * 2).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Step the state until it concludes. The bound covers the worst case of
/// comparisons plus the final exhaustion transition.
fn drive(state: &mut SearchState) {
    let max_calls = theoretical_step_bound(state.array.len()) as usize + 2;
    for _ in 0..max_calls {
        if state.completed {
            return;
        }
        step(state);
    }
    assert!(state.completed, "search did not conclude in {} calls", max_calls);
}

#[test]
fn test_every_present_target_is_found() {
    for len in 1..=64 {
        let text = even_array_text(len);
        for index in 0..len {
            let target = (index * 2).to_string();
            let mut state = initialize(&text, &target).unwrap();
            drive(&mut state);

            assert!(state.found, "len {} target {} not found", len, target);
            assert_eq!(
                state.found_index,
                Some(index),
                "len {} target {} found at wrong index",
                len,
                target
            );
            assert!(
                state.step as u32 <= theoretical_step_bound(len) + 1,
                "len {} target {} took {} comparisons",
                len,
                target,
                state.step
            );
        }
    }
}

#[test]
fn test_absent_targets_conclude_not_found() {
    for len in 1..=64 {
        let text = even_array_text(len);
        // Probe below the range, between every pair, and above the range
        let mut targets: Vec<i64> = vec![-1, (len as i64) * 2 + 1];
        targets.extend((0..len).map(|i| (i * 2) as i64 + 1));

        for target in targets {
            let mut state = initialize(&text, &target.to_string()).unwrap();
            drive(&mut state);

            assert!(!state.found, "len {} target {} falsely found", len, target);
            assert_eq!(state.found_index, None);
            assert!(
                state.left > state.right,
                "len {} target {} concluded with an open window",
                len,
                target
            );
        }
    }
}

#[test]
fn test_history_length_always_equals_step_count() {
    for target in ["14", "13"] {
        let mut state = initialize(&even_array_text(32), target).unwrap();
        while !state.completed {
            step(&mut state);
            assert_eq!(state.history.len(), state.step);
        }
    }
}

#[test]
fn test_window_shrinks_every_comparison() {
    for len in 2..=64 {
        let text = even_array_text(len);
        let mut state = initialize(&text, "1").unwrap();
        drive(&mut state);

        let widths: Vec<i64> = state
            .history
            .iter()
            .map(|record| record.right - record.left)
            .collect();
        for pair in widths.windows(2) {
            assert!(
                pair[1] < pair[0],
                "len {}: window width went {} -> {}",
                len,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_terminal_state_is_frozen() {
    for target in ["6", "7"] {
        let mut state = initialize(&even_array_text(10), target).unwrap();
        drive(&mut state);
        let settled = state.clone();

        for _ in 0..3 {
            assert_eq!(step(&mut state), StepOutcome::AlreadyCompleted);
        }
        assert_eq!(state, settled);
    }
}

#[test]
fn test_run_to_completion_matches_manual_stepping() {
    for len in 3..=20 {
        let text = even_array_text(len);
        for target in [(len as i64) - 1, (len as i64 / 2) * 2] {
            let target = target.to_string();
            let run_state = run_to_completion(&text, &target).unwrap();

            let mut stepped = initialize(&text, &target).unwrap();
            drive(&mut stepped);

            assert_eq!(run_state, stepped, "len {} target {}", len, target);
        }
    }
}
