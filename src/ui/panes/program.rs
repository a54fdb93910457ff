//! Program pane rendering
//!
//! Shows the filtered instruction stream wrapped to the pane width, colored
//! by instruction class, with the next instruction to execute highlighted.
//! The view follows the current instruction as execution moves.

use crate::interpreter::program::{Instruction, Program};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn instruction_style(inst: Instruction) -> Style {
    let color = match inst {
        Instruction::Increment | Instruction::Decrement => DEFAULT_THEME.arithmetic,
        Instruction::Right | Instruction::Left => DEFAULT_THEME.movement,
        Instruction::Output | Instruction::Input => DEFAULT_THEME.io,
        Instruction::LoopStart | Instruction::LoopEnd => DEFAULT_THEME.loop_bracket,
    };
    Style::default().fg(color)
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    position: usize,
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
        .title(format!(" Program ({} instructions) ", program.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if program.is_empty() {
        let paragraph = Paragraph::new("(no instructions)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(2).max(1) as usize; // Account for borders
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total_rows = program.len().div_ceil(width);

    // Keep the current instruction on screen
    let current_row = position.min(program.len() - 1) / width;
    if current_row < *scroll_offset {
        *scroll_offset = current_row;
    } else if current_row >= *scroll_offset + visible_height {
        *scroll_offset = current_row + 1 - visible_height;
    }
    *scroll_offset = (*scroll_offset).min(total_rows.saturating_sub(visible_height));

    let current_style = Style::default()
        .bg(DEFAULT_THEME.border_focused)
        .fg(DEFAULT_THEME.current_line_bg)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = program
        .instructions()
        .chunks(width)
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, inst)| {
                    let style = if row * width + col == position {
                        current_style
                    } else {
                        instruction_style(*inst)
                    };
                    Span::styled(inst.as_char().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
