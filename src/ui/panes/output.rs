//! Output pane rendering

use crate::snapshot::OutputBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Output line with control characters made visible
fn display_line(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '\t' => "\\t".to_string(),
            '\r' => "\\r".to_string(),
            c if c.is_control() => "·".to_string(),
            c => c.to_string(),
        })
        .collect()
}

/// Render the program output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &OutputBuffer,
    awaiting_input: bool,
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
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = output.get_output();

    if lines.is_empty() && !awaiting_input {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let mut all_items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(display_line(line)).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    if awaiting_input {
        all_items.push(
            ListItem::new("⌨ waiting for one character...").style(
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
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

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(display_line("a\rb"), "a\\rb");
        assert_eq!(display_line("\0\u{8}x\u{7f}"), "··x·");
        assert_eq!(display_line("tab\there"), "tab\\there");
        assert_eq!(display_line("héllo ÿ"), "héllo ÿ");
    }
}
