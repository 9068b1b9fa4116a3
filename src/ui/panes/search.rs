//! Search pane rendering with board highlighting
//!
//! Displays the multi-line status text produced by the session layer: the
//! current headline plus the aligned index/value/pointer board. Lines are
//! classified by their leading text and colored accordingly, so the board
//! rows and the found/not-found headlines stand out without the renderer
//! itself knowing anything about terminal styling.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Classify one line of status text and attach its display style.
fn style_status_line(line: &str) -> Line<'_> {
    let style = if line.starts_with("TARGET FOUND") {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("Target") && line.contains("NOT FOUND") {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("Error:") {
        Style::default().fg(DEFAULT_THEME.error)
    } else if line.starts_with("Index:") {
        Style::default().fg(DEFAULT_THEME.primary)
    } else if line.starts_with("Value:") {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else if line.starts_with("Legend:") {
        Style::default().fg(DEFAULT_THEME.comment)
    } else if is_marker_row(line) {
        Style::default()
            .fg(DEFAULT_THEME.pointer)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("Searching for")
        || line.starts_with("Step ")
        || line.starts_with("Binary search complete")
        || line.starts_with("Welcome")
    {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    Line::styled(line, style)
}

/// The pointer row of the board carries only `L`, `R`, `M` markers and
/// separators.
fn is_marker_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| matches!(c, 'L' | 'R' | 'M' | ',' | ' '))
}

/// Render the search pane showing the status text and board.
pub fn render_search_pane(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if status_text.is_empty() {
        let paragraph = Paragraph::new("(no search yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = status_text
        .lines()
        .map(|line| ListItem::new(style_status_line(line)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
