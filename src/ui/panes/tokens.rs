//! Token stream pane

use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    let color = match kind {
        TokenKind::Identifier => DEFAULT_THEME.identifier,
        TokenKind::Keyword => DEFAULT_THEME.keyword,
        TokenKind::Separator => DEFAULT_THEME.primary,
        TokenKind::Operator => DEFAULT_THEME.operator,
        TokenKind::Literal => DEFAULT_THEME.number,
    };
    Style::default().fg(color)
}

/// Render the token list, one row per token with its position
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = super::visible_height(area);
    super::clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|token| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4}:{:<3} ", token.location.line, token.location.column),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(token.to_string(), kind_style(token.kind)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
