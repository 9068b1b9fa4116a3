//! Binary search state machine
//!
//! This module provides the core search logic:
//! - [`state`]: the [`state::SearchState`] entity and its per-step records
//! - [`engine`]: initialization, the one-comparison step transition, and the
//!   capped run-to-completion loop
//! - [`errors`]: validation error types
//!
//! # Execution Model
//!
//! One `SearchState` represents one search. Each [`engine::step`] call
//! performs at most one comparison and appends at most one history record;
//! terminal states (`found`, `exhausted`) absorb further calls as no-ops.

pub mod engine;
pub mod errors;
pub mod state;
