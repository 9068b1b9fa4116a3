//! # Introduction
//!
//! bisectty runs binary search over a user-supplied sorted array one
//! comparison at a time, recording every probe so the search can be replayed
//! and explained through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Search pipeline
//!
//! ```text
//! Input text → Parser → SearchState → Engine steps → Renderers → TUI
//! ```
//!
//! 1. [`parse`] — splits and validates the comma-separated array and the
//!    target.
//! 2. [`search`] — the state record ([`search::state::SearchState`]) and the
//!    engine that advances it one window-halving transition at a time,
//!    appending a [`search::state::StepRecord`] per comparison.
//! 3. [`render`] — pure text views of a state: the aligned board, a per-step
//!    explanation, and the concluding summary.
//! 4. [`session`] — the driver boundary: four entry points that exchange
//!    state by value and report every condition as display text.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Input format
//!
//! Array: comma-separated base-10 integers, ascending, at least one element
//! (e.g. `"2, 5, 8, 12"`). Target: a single base-10 integer. Whitespace
//! around tokens is ignored.

pub mod parse;
pub mod render;
pub mod search;
pub mod session;
pub mod ui;
