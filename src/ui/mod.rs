//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, editing vs stepping
//!   modes, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (inputs,
//!   search, step details, history, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the input field
//! contents and call [`App::run`] to start the event loop. The app drives the
//! search exclusively through the [`session`] boundary and stores the returned
//! state between keystrokes.
//!
//! [`App::run`]: app::App::run
//! [`session`]: crate::session

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
