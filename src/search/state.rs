//! Search state and step records
//!
//! [`SearchState`] is the single mutable entity of the system: one
//! in-progress or concluded binary search. It is created by
//! [`crate::search::engine::initialize`] (which validates the inputs) and
//! mutated only by [`crate::search::engine::step`]. Everything else reads it.
//!
//! The window bounds are signed: `right` legitimately reaches `-1` when the
//! window collapses at index 0, and `left > right` is the exhaustion signal.

/// Outcome of comparing the middle value against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `array[mid] == target`
    Equal,
    /// `array[mid] < target`
    Less,
    /// `array[mid] > target`
    Greater,
}

/// The pointer movement taken after a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// The search concluded at `mid`.
    Found,
    /// `left` moved to `mid + 1`.
    SearchRight,
    /// `right` moved to `mid - 1`.
    SearchLeft,
}

/// Immutable log of one comparison: the window it saw and what it decided.
///
/// `left` and `right` are the bounds *at comparison time* (before any pointer
/// movement), so both are valid indices into the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step_num: usize,
    pub left: i64,
    pub right: i64,
    pub mid: usize,
    pub mid_value: i64,
    pub comparison: Comparison,
    pub action: StepAction,
}

/// One binary search in progress (or concluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// The values being searched; non-empty and ascending, fixed for the
    /// lifetime of the state. Sortedness is enforced at initialization and
    /// never re-checked.
    pub array: Vec<i64>,

    /// The value being looked for.
    pub target: i64,

    /// Inclusive lower bound of the current window.
    pub left: i64,

    /// Inclusive upper bound of the current window. May drop below `left`
    /// (and below zero), which marks the window as exhausted.
    pub right: i64,

    /// Comparisons performed so far.
    pub step: usize,

    /// True once a comparison matched the target exactly.
    pub found: bool,

    /// Index of the match, if any.
    pub found_index: Option<usize>,

    /// Append-only record of every comparison taken, in order. Used for
    /// rendering and audit only; the transition logic never consults it.
    pub history: Vec<StepRecord>,

    /// True once the search concluded, by match or by exhaustion. Further
    /// step calls are well-defined no-ops.
    pub completed: bool,
}

impl SearchState {
    /// Build the initial state over an already-validated array.
    pub(crate) fn new(array: Vec<i64>, target: i64) -> Self {
        let right = array.len() as i64 - 1;
        SearchState {
            array,
            target,
            left: 0,
            right,
            step: 0,
            found: false,
            found_index: None,
            history: Vec::new(),
            completed: false,
        }
    }

    /// True once the bounds have crossed and no window remains.
    pub fn window_is_empty(&self) -> bool {
        self.left > self.right
    }

    /// Midpoint of the current window, or `None` once the bounds crossed.
    ///
    /// Floor division, as the transition function uses: both bounds are
    /// non-negative whenever the window is non-empty.
    pub fn current_mid(&self) -> Option<usize> {
        if self.window_is_empty() {
            None
        } else {
            Some((self.left + self.right).div_euclid(2) as usize)
        }
    }
}
