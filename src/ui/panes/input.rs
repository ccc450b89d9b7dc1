//! Input line and error banner rendering

use crate::error::ValidationError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub const PROMPT: &str = " Enter numbers (0-9) separated by spaces ";
pub const PLACEHOLDER: &str = "e.g., 9 8 3 2 4 6 1";

/// Render the bordered input line and place the cursor after the text
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .title(PROMPT)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 0, 0, 0));

    let paragraph = if input.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(input).style(Style::default().fg(DEFAULT_THEME.fg))
    };
    frame.render_widget(paragraph.block(block), area);

    // Border plus left padding puts text at x + 2
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + 2)
        .saturating_add(input.chars().count() as u16)
        .min(max_x);
    frame.set_cursor_position((cursor_x, area.y + 1));
}

/// Render the error banner; blank when there is no error
pub fn render_error_banner(frame: &mut Frame, area: Rect, error: Option<&ValidationError>) {
    let text = error.map(|e| format!(" {}", e)).unwrap_or_default();
    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}
