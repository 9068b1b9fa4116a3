//! Driver-facing session boundary
//!
//! The surrounding driver (TUI or headless runner) talks to the search core
//! exclusively through the four functions here. State crosses the boundary
//! by value: the driver stores the [`SearchState`] between calls and hands it
//! back for the next transition. No error type crosses the boundary either;
//! every failure or informational condition comes back as display text next
//! to a `None` state.

use crate::render::{render_board, render_step_explanation, render_summary};
use crate::search::engine::{self, StepOutcome};
use crate::search::state::SearchState;

/// Parse and validate the inputs and build a fresh search.
///
/// On success returns the new state, a status text headed by the search goal
/// and the initial board, and an invitation to step. On failure the state is
/// `None` and the status carries the validation message.
pub fn initialize_session(
    array_text: &str,
    target_text: &str,
) -> (Option<SearchState>, String, String) {
    match engine::initialize(array_text, target_text) {
        Ok(state) => {
            let status = format!(
                "Searching for {} in the array\n\n{}",
                state.target,
                render_board(&state, None, false)
            );
            let detail =
                String::from("Ready to search. Press 'n' or the right arrow to take the first step.");
            (Some(state), status, detail)
        }
        Err(err) => (None, format!("Error: {}", err), String::new()),
    }
}

/// Advance the search by one transition.
///
/// `None` in means no search has been initialized; the state comes back
/// unchanged (still `None`) with a hint. Otherwise the returned state is the
/// post-transition state, paired with the refreshed board and a per-step
/// explanation.
pub fn step_session(state: Option<SearchState>) -> (Option<SearchState>, String, String) {
    match state {
        None => (
            None,
            String::from("Please initialize the search first."),
            String::new(),
        ),
        Some(mut state) => {
            let (status, detail) = advance(&mut state);
            (Some(state), status, detail)
        }
    }
}

/// Initialize from the given inputs and drive the search to its conclusion,
/// returning the summary (with the final board) and the accumulated per-step
/// log. Validation failures surface as the summary text with an empty log.
pub fn run_session(array_text: &str, target_text: &str) -> (String, String) {
    let (state, status, _) = initialize_session(array_text, target_text);
    let mut state = match state {
        Some(state) => state,
        None => return (status, String::new()),
    };

    let mut log = String::new();
    let mut iterations = 0;
    let max_iterations = state.array.len();
    while !state.completed && iterations < max_iterations {
        let (_, detail) = advance(&mut state);
        log.push_str(&detail);
        log.push_str("\n\n---\n\n");
        iterations += 1;
    }

    let mut summary = render_summary(&state);
    summary.push_str("\n\n");
    summary.push_str(&render_board(&state, None, state.found));
    (summary, log)
}

/// Discard the current search. The driver replaces its stored state with the
/// returned `None` and shows the message.
pub fn reset_session() -> (Option<SearchState>, String, String) {
    (
        None,
        String::from("Reset complete. Enter a new array and target to begin."),
        String::new(),
    )
}

/// Take one engine transition and format its status and detail texts.
fn advance(state: &mut SearchState) -> (String, String) {
    match engine::step(state) {
        StepOutcome::AlreadyCompleted => {
            (String::from("Search already completed."), String::new())
        }
        StepOutcome::Exhausted => {
            let status = format!(
                "Target {} NOT FOUND in the array!\n\n{}",
                state.target,
                render_board(state, None, false)
            );
            let detail = format!(
                "Total steps: {}\nComparisons made: {}\n\nThe search space has been exhausted.",
                state.step, state.step
            );
            (status, detail)
        }
        StepOutcome::Compared(record) => {
            let detail = render_step_explanation(&record, state);
            let status = if state.found {
                format!(
                    "TARGET FOUND at index {}!\n\n{}",
                    record.mid,
                    render_board(state, Some(record.mid), true)
                )
            } else {
                format!(
                    "Step {}: Searching...\n\n{}",
                    record.step_num,
                    render_board(state, Some(record.mid), false)
                )
            };
            (status, detail)
        }
    }
}
