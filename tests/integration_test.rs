// Integration tests for the search session boundary

use bisectty::search::state::SearchState;
use bisectty::session::{initialize_session, reset_session, run_session, step_session};

const DEMO_ARRAY: &str = "2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78";

fn init(array: &str, target: &str) -> Option<SearchState> {
    initialize_session(array, target).0
}

/// Step until the search concludes, returning the final state and the number
/// of calls made.
fn step_until_completed(mut state: Option<SearchState>, max_calls: usize) -> (SearchState, usize) {
    let mut calls = 0;
    for _ in 0..max_calls {
        if state.as_ref().is_some_and(|s| s.completed) {
            break;
        }
        let (next, _, _) = step_session(state);
        state = next;
        calls += 1;
    }
    let state = state.expect("search state lost during stepping");
    assert!(state.completed, "search did not conclude in {} calls", max_calls);
    (state, calls)
}

#[test]
fn test_demo_search_finds_target_in_one_step() {
    let state = init(DEMO_ARRAY, "23");
    let (state, status, detail) = step_session(state);
    let state = state.expect("state should survive a step");

    assert!(state.found);
    assert_eq!(state.found_index, Some(5));
    assert_eq!(state.step, 1);
    assert_eq!(state.history.len(), 1);
    assert!(status.starts_with("TARGET FOUND at index 5!"));
    assert!(detail.contains("23 == 23 → target found!"));
}

#[test]
fn test_absent_target_concludes_within_bound() {
    let state = init("1, 3, 5, 7, 9, 11, 13, 15, 17, 19", "4");
    let (state, _) = step_until_completed(state, 12);

    assert!(!state.found);
    assert_eq!(state.found_index, None);
    assert!(state.left > state.right);
    // ceil(log2(10)) = 4 comparisons at most
    assert!(state.step <= 4, "took {} comparisons", state.step);
}

#[test]
fn test_single_element_hit() {
    let state = init("5", "5");
    let (state, status, _) = step_session(state);
    let state = state.unwrap();

    assert!(state.found);
    assert_eq!(state.found_index, Some(0));
    assert_eq!(state.step, 1);
    assert!(status.starts_with("TARGET FOUND at index 0!"));
}

#[test]
fn test_single_element_miss() {
    let state = init("5", "9");

    // First call compares, second call observes the crossed window
    let (state, _, _) = step_session(state);
    let (state, status, detail) = step_session(state);
    let state = state.unwrap();

    assert!(state.completed);
    assert!(!state.found);
    assert_eq!(state.step, 1);
    assert_eq!(state.history.len(), 1);
    assert!(status.starts_with("Target 9 NOT FOUND in the array!"));
    assert!(detail.contains("The search space has been exhausted."));
}

#[test]
fn test_unsorted_input_rejected() {
    let (state, status, _) = initialize_session("3, 1, 2", "2");
    assert!(state.is_none());
    assert_eq!(status, "Error: Array must be sorted in ascending order");
}

#[test]
fn test_non_integer_input_rejected() {
    let (state, status, _) = initialize_session("a, b", "2");
    assert!(state.is_none());
    assert_eq!(status, "Error: Invalid array: 'a' is not a valid integer");
}

#[test]
fn test_invalid_target_rejected() {
    let (state, status, _) = initialize_session("1, 2, 3", "x");
    assert!(state.is_none());
    assert_eq!(status, "Error: Invalid target: 'x' is not a valid integer");
}

#[test]
fn test_step_texts_walkthrough() {
    let state = init("1, 3, 5, 7, 9", "9");

    let (state, status, detail) = step_session(state);
    assert!(status.starts_with("Step 1: Searching..."));
    assert!(detail.contains("middle index:  2  ((0 + 4) / 2)"));
    assert!(detail.contains("5 < 9 → target is in the right half"));

    let (state, status, _) = step_session(state);
    assert!(status.starts_with("Step 2: Searching..."));

    let (state, status, detail) = step_session(state);
    let state = state.unwrap();
    assert!(status.starts_with("TARGET FOUND at index 4!"));
    assert!(detail.contains("9 == 9 → target found!"));

    assert_eq!(state.step, 3);
    let mids: Vec<usize> = state.history.iter().map(|record| record.mid).collect();
    assert_eq!(mids, vec![2, 3, 4]);
}

#[test]
fn test_step_after_completion_leaves_state_unchanged() {
    let state = init("5", "5");
    let (state, _, _) = step_session(state);
    let settled = state.clone().unwrap();

    let (state, status, _) = step_session(state);
    assert_eq!(status, "Search already completed.");
    assert_eq!(state.unwrap(), settled);
}

#[test]
fn test_step_without_initialization() {
    let (state, status, _) = step_session(None);
    assert!(state.is_none());
    assert_eq!(status, "Please initialize the search first.");
}

#[test]
fn test_reset_then_new_search() {
    let state = init(DEMO_ARRAY, "23");
    let _ = step_session(state);

    let (state, status, _) = reset_session();
    assert!(state.is_none());
    assert!(status.starts_with("Reset complete."));

    let state = init("10, 20, 30", "30");
    let (state, _, _) = step_session(state);
    assert!(state.is_some());
}

#[test]
fn test_run_session_transcript() {
    let (summary, log) = run_session(DEMO_ARRAY, "23");

    assert!(summary.starts_with("Binary search complete"));
    assert!(summary.contains("Total steps: 1"));
    assert!(summary.contains("Result: target found at index 5"));
    assert!(summary.contains("Index:"));
    assert!(log.contains("Step 1 details:"));
}

#[test]
fn test_run_session_absent_target() {
    let (summary, log) = run_session("1, 3, 5, 7, 9, 11, 13, 15, 17, 19", "4");

    assert!(summary.contains("Result: target not found in the array"));
    assert!(log.contains("The search space has been exhausted."));
}

#[test]
fn test_run_session_validation_error() {
    let (summary, log) = run_session("2, 1", "1");
    assert_eq!(summary, "Error: Array must be sorted in ascending order");
    assert!(log.is_empty());
}
