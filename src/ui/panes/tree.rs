//! Syntax tree pane

use crate::parser::ast::Program;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn label_style(label: &str) -> Style {
    match label {
        "Program" | "If" | "Print" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if label.starts_with("IDENTIFIER(") => Style::default().fg(DEFAULT_THEME.identifier),
        _ if label.starts_with("LITERAL(") => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// Render the program as an indented tree
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(" Syntax Tree ", is_focused);

    let rows = program.as_node().render_tree();
    let visible_height = super::visible_height(area);
    super::clamp_scroll(scroll_offset, rows.len(), visible_height);

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let label = row.trim_start();
            let indent = &row[..row.len() - label.len()];
            Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(label.to_string(), label_style(label)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
