//! Textual views of a search state
//!
//! Three pure renderers over a [`SearchState`] snapshot:
//! - [`render_board`]: the aligned index/value/pointer grid with a legend
//! - [`render_step_explanation`]: one history entry as prose
//! - [`render_summary`]: the concluding totals and the theoretical bound
//!
//! # Board Geometry
//!
//! Rows carry a 7-column prefix (`"Index: "`, `"Value: "`, seven spaces for
//! the pointer row) followed by one 6-wide centered cell per element. The
//! current middle cell is wrapped in parentheses, the found cell in square
//! brackets; both stay 6 columns wide so the rows line up. Pointer markers
//! (`L`, `R`, `M`, combined `L,R`) are drawn only while the window is
//! non-empty.

use crate::search::engine::theoretical_step_bound;
use crate::search::state::{Comparison, SearchState, StepRecord};

/// Render the array as an aligned grid of indices, values, and pointers.
///
/// `current_mid` overrides the displayed middle; when `None` and the window
/// is non-empty, the window midpoint is used. With `highlight_found` the cell
/// at the found index is bracketed instead of receiving the mid marker.
pub fn render_board(
    state: &SearchState,
    current_mid: Option<usize>,
    highlight_found: bool,
) -> String {
    let window_open = !state.window_is_empty();
    let current_mid = match current_mid {
        Some(mid) => Some(mid),
        None => state.current_mid(),
    };

    let mut board = String::new();

    board.push_str("Index: ");
    for i in 0..state.array.len() {
        board.push_str(&format!("{:^6}", i));
    }
    board.push('\n');

    board.push_str("Value: ");
    for (i, value) in state.array.iter().enumerate() {
        if highlight_found && Some(i) == state.found_index {
            board.push_str(&format!("[{:^4}]", value));
        } else if Some(i) == current_mid && window_open {
            board.push_str(&format!("({:^4})", value));
        } else {
            board.push_str(&format!("{:^6}", value));
        }
    }
    board.push('\n');

    board.push_str("       ");
    for i in 0..state.array.len() {
        let i = i as i64;
        if i == state.left && i == state.right && window_open {
            board.push_str("  L,R ");
        } else if i == state.left && window_open {
            board.push_str("  L   ");
        } else if i == state.right && window_open {
            board.push_str("  R   ");
        } else if Some(i as usize) == current_mid && window_open {
            board.push_str("  M   ");
        } else {
            board.push_str("      ");
        }
    }
    board.push('\n');

    board.push('\n');
    board.push_str("Legend: L=left pointer, R=right pointer, M=middle pointer");
    if highlight_found {
        board.push_str(", [ ]=found");
    }

    board
}

/// Render one comparison as prose: the window it saw, the middle it probed,
/// and the branch it took.
pub fn render_step_explanation(record: &StepRecord, state: &SearchState) -> String {
    let left_value = state.array[record.left as usize];
    let right_value = state.array[record.right as usize];

    let mut text = String::new();
    text.push_str(&format!("Step {} details:\n", record.step_num));
    text.push_str(&format!(
        "  left pointer:  index {} (value {})\n",
        record.left, left_value
    ));
    text.push_str(&format!(
        "  right pointer: index {} (value {})\n",
        record.right, right_value
    ));
    text.push_str(&format!(
        "  middle index:  {}  (({} + {}) / 2)\n",
        record.mid, record.left, record.right
    ));
    text.push_str(&format!("  middle value:  {}\n", record.mid_value));
    text.push_str(&format!("  target value:  {}\n", state.target));
    text.push('\n');

    text.push_str("Comparison:\n");
    match record.comparison {
        Comparison::Equal => {
            text.push_str(&format!(
                "  {} == {} → target found!",
                record.mid_value, state.target
            ));
        }
        Comparison::Less => {
            text.push_str(&format!(
                "  {} < {} → target is in the right half\n",
                record.mid_value, state.target
            ));
            text.push_str(&format!(
                "  action: move left pointer to index {}",
                record.mid + 1
            ));
        }
        Comparison::Greater => {
            text.push_str(&format!(
                "  {} > {} → target is in the left half\n",
                record.mid_value, state.target
            ));
            text.push_str(&format!(
                "  action: move right pointer to index {}",
                record.mid as i64 - 1
            ));
        }
    }

    text
}

/// Render the concluding summary: target, totals, result, and the
/// theoretical worst case for the array's size.
pub fn render_summary(state: &SearchState) -> String {
    let mut text = String::new();
    text.push_str("Binary search complete\n\n");
    text.push_str(&format!("Target: {}\n", state.target));
    text.push_str(&format!("Total steps: {}\n", state.step));
    text.push_str(&format!("Total comparisons: {}\n", state.step));

    match state.found_index {
        Some(index) if state.found => {
            text.push_str(&format!("Result: target found at index {}\n", index));
        }
        _ => {
            text.push_str("Result: target not found in the array\n");
        }
    }

    text.push_str(&format!(
        "Algorithm efficiency: O(log n), at most {} steps for an array of size {}",
        theoretical_step_bound(state.array.len()),
        state.array.len()
    ));

    text
}
