//! Input fields pane rendering

use crate::ui::app::InputField;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the array and target input fields.
///
/// While editing, `active` names the field receiving keystrokes; it is drawn
/// with a highlighted background and a block cursor.
pub fn render_inputs_pane(
    frame: &mut Frame,
    area: Rect,
    array_input: &str,
    target_input: &str,
    active: Option<InputField>,
) {
    let border_style = if active.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Inputs ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = vec![
        field_line("Array:  ", array_input, active == Some(InputField::Array)),
        field_line("Target: ", target_input, active == Some(InputField::Target)),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, value: &'a str, is_active: bool) -> Line<'a> {
    let label_span = Span::styled(label, Style::default().fg(DEFAULT_THEME.primary));

    if is_active {
        Line::from(vec![
            label_span,
            Span::styled(
                value,
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.highlight_bg),
            ),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.border_focused)),
        ])
    } else {
        Line::from(vec![
            label_span,
            Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
        ])
    }
}
