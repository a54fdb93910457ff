//! Tape pane rendering
//!
//! One row per cell: index, decimal value, hex value and the character the
//! cell would print. The cursor row is highlighted and kept in view.

use crate::machine::TapeMachine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Printable form of a cell's character
fn cell_glyph(value: u8) -> String {
    match value {
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        0x20..=0x7e | 0xa1..=0xff => char::from(value).to_string(),
        _ => "·".to_string(),
    }
}

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    machine: &TapeMachine,
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
        .title(format!(
            " Tape ({} cells, cursor {}) ",
            machine.cells().len(),
            machine.cursor()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let cells = machine.cells();
    let cursor = machine.cursor();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Follow the cursor
    if cursor < *scroll_offset {
        *scroll_offset = cursor;
    } else if cursor >= *scroll_offset + visible_height {
        *scroll_offset = cursor + 1 - visible_height;
    }
    *scroll_offset = (*scroll_offset).min(cells.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = cells
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, &value)| {
            let is_cursor = index == cursor;
            let marker = if is_cursor { "▶ " } else { "  " };
            let row_style = if is_cursor {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value_style = if value == 0 {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.secondary)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
                Span::styled(
                    format!("[{:>4}]", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::raw(" "),
                Span::styled(format!("{:>3}", value), value_style),
                Span::styled(
                    format!("  0x{:02x}  ", value),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(cell_glyph(value), Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            ListItem::new(line).style(row_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
