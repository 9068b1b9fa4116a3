//! Step details pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Classify one line of the step explanation and attach its display style.
fn style_detail_line(line: &str) -> Line<'_> {
    let style = if line.ends_with("details:") || line == "Comparison:" {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    } else if line.contains("target found!") {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else if line.contains("The search space has been exhausted.") {
        Style::default().fg(DEFAULT_THEME.error)
    } else if line.trim_start().starts_with("action:") {
        Style::default().fg(DEFAULT_THEME.pointer)
    } else if line.contains('→') {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else if line == "---" {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    Line::styled(line, style)
}

/// Render the pane showing the current step explanation (or, after a full
/// run, the accumulated step log).
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    detail_text: &str,
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
        .title(" Step Details ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if detail_text.is_empty() {
        let paragraph = Paragraph::new("(no step taken yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = detail_text
        .lines()
        .map(|line| ListItem::new(style_detail_line(line)))
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
