//! Binary search transition engine
//!
//! This module provides the state machine of the system:
//! - [`initialize`]: validate the two raw inputs and build a fresh state
//! - [`step`]: advance a search by exactly one comparison
//! - [`run_to_completion`]: drive a fresh search to its terminal state
//!
//! # State Machine
//!
//! A search is `active` until a comparison matches (`found`) or the window
//! bounds cross (`exhausted`). Both terminal states are collapsed under the
//! `completed` flag, distinguished by `found`. Stepping a completed search is
//! a well-defined no-op, not an error.
//!
//! The exhaustion transition is deliberately asymmetric: it appends no
//! history record and does not increment the comparison counter, because no
//! comparison happens. Every other transition records exactly one
//! [`StepRecord`].

use crate::parse;
use crate::search::errors::InitError;
use crate::search::state::{Comparison, SearchState, StepAction, StepRecord};

/// What a single [`step`] call did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The search had already concluded; nothing changed.
    AlreadyCompleted,

    /// The window bounds had crossed: the search concluded without a match
    /// on this call. No comparison was made.
    Exhausted,

    /// One comparison was performed; the record describes the window it saw,
    /// the outcome, and the pointer movement taken.
    Compared(StepRecord),
}

/// Validate the raw inputs and construct the initial search state.
///
/// Validation order: array parse, emptiness, sortedness, target parse. The
/// first failing gate wins.
pub fn initialize(array_text: &str, target_text: &str) -> Result<SearchState, InitError> {
    let array = parse::parse_array(array_text).map_err(InitError::InvalidArray)?;

    if array.is_empty() {
        return Err(InitError::EmptyArray);
    }

    if !parse::is_sorted(&array) {
        return Err(InitError::UnsortedArray);
    }

    let target = parse::parse_target(target_text).map_err(InitError::InvalidTarget)?;

    Ok(SearchState::new(array, target))
}

/// Advance the search by one comparison.
///
/// Mutates `state` in place and reports what happened. Calling this on a
/// completed search returns [`StepOutcome::AlreadyCompleted`] and leaves the
/// state bit-for-bit unchanged.
pub fn step(state: &mut SearchState) -> StepOutcome {
    if state.completed {
        return StepOutcome::AlreadyCompleted;
    }

    if state.window_is_empty() {
        state.completed = true;
        state.found = false;
        return StepOutcome::Exhausted;
    }

    state.step += 1;

    // Floor division; both bounds are non-negative while the window is
    // non-empty, and mid lies within it, so the index is always valid.
    let mid = (state.left + state.right).div_euclid(2) as usize;
    let mid_value = state.array[mid];

    let (comparison, action) = if mid_value == state.target {
        (Comparison::Equal, StepAction::Found)
    } else if mid_value < state.target {
        (Comparison::Less, StepAction::SearchRight)
    } else {
        (Comparison::Greater, StepAction::SearchLeft)
    };

    let record = StepRecord {
        step_num: state.step,
        left: state.left,
        right: state.right,
        mid,
        mid_value,
        comparison,
        action,
    };
    state.history.push(record.clone());

    match action {
        StepAction::Found => {
            state.found = true;
            state.found_index = Some(mid);
            state.completed = true;
        }
        StepAction::SearchRight => {
            state.left = mid as i64 + 1;
        }
        StepAction::SearchLeft => {
            state.right = mid as i64 - 1;
        }
    }

    StepOutcome::Compared(record)
}

/// Initialize from the raw inputs and step until the search concludes.
///
/// The loop is capped at `array.len()` iterations as a defensive bound; a
/// correct search needs far fewer (see [`theoretical_step_bound`]). Returns
/// the final state; the caller renders it however it likes.
pub fn run_to_completion(array_text: &str, target_text: &str) -> Result<SearchState, InitError> {
    let mut state = initialize(array_text, target_text)?;

    let cap = state.array.len();
    let mut iterations = 0;
    while !state.completed && iterations < cap {
        step(&mut state);
        iterations += 1;
    }

    Ok(state)
}

/// Worst-case comparison count for an array of `len` elements:
/// `ceil(log2(len))`, with `0` for empty and single-element arrays.
pub fn theoretical_step_bound(len: usize) -> u32 {
    // Smallest k with 2^k >= len, computed without floating point.
    len.next_power_of_two().trailing_zeros()
}
