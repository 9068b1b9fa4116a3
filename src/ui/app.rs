//! Main TUI application state and logic

use crate::search::state::SearchState;
use crate::session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Whether keystrokes edit the input fields or drive the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Stepping,
}

/// Which input field receives keystrokes while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Array,
    Target,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::Array => InputField::Target,
            InputField::Target => InputField::Array,
        }
    }
}

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Search,
    Details,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (search -> details -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Search => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Search,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Search => FocusedPane::Log,
            FocusedPane::Details => FocusedPane::Search,
            FocusedPane::Log => FocusedPane::Details,
        }
    }
}

/// The main application state
pub struct App {
    /// Current search, if one has been initialized
    pub state: Option<SearchState>,

    /// Text of the array input field
    pub array_input: String,

    /// Text of the target input field
    pub target_input: String,

    /// Editing the inputs vs stepping the search
    pub mode: Mode,

    /// Input field receiving keystrokes while editing
    pub input_field: InputField,

    /// Currently focused scrollable pane
    pub focused_pane: FocusedPane,

    /// Multi-line status text shown in the search pane
    pub status_text: String,

    /// Per-step explanation shown in the details pane
    pub detail_text: String,

    /// Status headlines, one per transition taken so far
    pub log_lines: Vec<String>,

    /// Per-pane scroll offsets
    pub search_scroll: usize,
    pub details_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// One-line message for the status bar
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app with the given input field contents, starting in
    /// editing mode with a welcome screen.
    pub fn new(array_input: String, target_input: String) -> Self {
        App {
            state: None,
            array_input,
            target_input,
            mode: Mode::Editing,
            input_field: InputField::Array,
            focused_pane: FocusedPane::Search,
            status_text: welcome_text(),
            detail_text: String::new(),
            log_lines: Vec::new(),
            search_scroll: 0,
            details_scroll: 0,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.state.as_ref().is_some_and(|s| !s.completed) {
                        self.do_step();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Initialize a search from the current input field contents. On success
    /// the app switches to stepping mode; on a validation error it stays in
    /// editing mode with the message in the search pane.
    pub fn start_search(&mut self) {
        let (state, status, detail) =
            session::initialize_session(&self.array_input, &self.target_input);
        let initialized = state.is_some();
        self.state = state;
        self.status_text = status;
        self.detail_text = detail;
        self.is_playing = false;
        self.search_scroll = 0;
        self.details_scroll = 0;

        if initialized {
            self.mode = Mode::Stepping;
            self.log_lines.clear();
            self.log_lines.push(self.headline());
            self.log_scroll = usize::MAX;
            self.status_message = "Search initialized".to_string();
        } else {
            self.mode = Mode::Editing;
            self.status_message = self.headline();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Inputs (top) | Search (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Step Details (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let active_field = if self.mode == Mode::Editing {
            Some(self.input_field)
        } else {
            None
        };

        super::panes::render_inputs_pane(
            frame,
            left_rows[0],
            &self.array_input,
            &self.target_input,
            active_field,
        );

        super::panes::render_search_pane(
            frame,
            left_rows[1],
            &self.status_text,
            self.focused_pane == FocusedPane::Search,
            &mut self.search_scroll,
        );

        super::panes::render_details_pane(
            frame,
            right_rows[0],
            &self.detail_text,
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        super::panes::render_log_pane(
            frame,
            right_rows[1],
            &self.log_lines,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.state.as_ref().map(|s| s.step),
            self.mode == Mode::Editing,
            self.is_playing,
            self.state.as_ref().is_some_and(|s| s.found),
            self.state
                .as_ref()
                .is_some_and(|s| s.completed && !s.found),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Editing => self.handle_editing_key(key),
            Mode::Stepping => self.handle_stepping_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.start_search();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.input_field = self.input_field.next();
            }
            KeyCode::Esc => {
                // Return to the running search, or quit when there is none
                if self.state.is_some() {
                    self.mode = Mode::Stepping;
                    self.status_message = "Editing cancelled".to_string();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Backspace => {
                self.active_input_mut().pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && !c.is_control() => {
                self.active_input_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_stepping_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Right => {
                self.is_playing = false;
                self.do_step();
            }
            KeyCode::Char('a') => {
                self.run_all();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            KeyCode::Char('e') => {
                self.is_playing = false;
                self.mode = Mode::Editing;
                self.status_message = "Editing inputs".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.jump_to_end();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Advance the search by one transition and refresh the pane texts.
    fn do_step(&mut self) {
        let was_live = self.state.as_ref().is_some_and(|s| !s.completed);
        let (state, status, detail) = session::step_session(self.state.take());
        self.state = state;
        self.status_text = status;
        self.detail_text = detail;
        self.search_scroll = 0;
        self.details_scroll = 0;

        let headline = self.headline();
        self.status_message = headline.clone();
        if was_live {
            self.log_lines.push(headline);
            // Auto-scroll history to bottom
            self.log_scroll = usize::MAX;
        }
    }

    /// Step the live search until it concludes.
    fn jump_to_end(&mut self) {
        self.is_playing = false;
        let max_transitions = match self.state.as_ref() {
            Some(state) => state.array.len() + 1,
            None => return,
        };
        for _ in 0..max_transitions {
            if self.state.as_ref().is_some_and(|s| s.completed) {
                break;
            }
            self.do_step();
        }
        self.status_message = "Jumped to end".to_string();
    }

    /// Run a fresh search over the current inputs and show its summary and
    /// step log. The live search state is left untouched.
    fn run_all(&mut self) {
        self.is_playing = false;
        let (summary, log) = session::run_session(&self.array_input, &self.target_input);
        self.status_text = summary;
        self.detail_text = log;
        self.search_scroll = 0;
        self.details_scroll = 0;
        if self.status_text.starts_with("Error:") {
            self.status_message = self.headline();
        } else {
            self.status_message = "Ran to completion".to_string();
        }
    }

    /// Discard the current search and return to editing.
    fn reset(&mut self) {
        let (state, status, detail) = session::reset_session();
        self.state = state;
        self.status_text = status;
        self.detail_text = detail;
        self.log_lines.clear();
        self.search_scroll = 0;
        self.details_scroll = 0;
        self.log_scroll = 0;
        self.is_playing = false;
        self.mode = Mode::Editing;
        self.status_message = "Reset".to_string();
    }

    /// First line of the status text, used for the bar and the history log.
    fn headline(&self) -> String {
        self.status_text.lines().next().unwrap_or("").to_string()
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.input_field {
            InputField::Array => &mut self.array_input,
            InputField::Target => &mut self.target_input,
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Search => &mut self.search_scroll,
            FocusedPane::Details => &mut self.details_scroll,
            FocusedPane::Log => &mut self.log_scroll,
        }
    }
}

fn welcome_text() -> String {
    String::from(
        "Welcome to bisectty!\n\n\
         Enter a comma-separated sorted array and a target value,\n\
         then press Enter to start the search.\n\n\
         While stepping: 'n' or the right arrow takes one comparison,\n\
         space autoplays, 'a' runs the whole search, 'e' edits the inputs.",
    )
}
