//! Sorting steps pane
//!
//! One row per snapshot. Settled values are drawn in the success color,
//! unsettled ones in the secondary color, and the selected step gets the
//! current-line background.

use crate::snapshot::{Snapshot, Trace};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Build the styled row for one snapshot
pub fn step_line(index: usize, snapshot: &Snapshot) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>2} │ ", index + 1),
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    for (p, cell) in snapshot.cells().iter().enumerate() {
        if p > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if cell.settled {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.secondary)
        };
        spans.push(Span::styled(cell.value.to_string(), style));
    }

    Line::from(spans)
}

/// Render the steps pane, keeping the selected row visible
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    trace: Option<&Trace>,
    selected: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Sorting Steps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let trace = match trace {
        Some(trace) if !trace.is_empty() => trace,
        _ => {
            *scroll_offset = 0;
            let paragraph = Paragraph::new("(no steps yet, press Enter to sort)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Scroll just enough to keep the selection on screen
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    *scroll_offset = (*scroll_offset).min(trace.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = trace
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, snapshot)| {
            let item = ListItem::new(step_line(i, snapshot));
            if i == selected {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
