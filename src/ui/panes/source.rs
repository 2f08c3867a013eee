//! Source pane rendering with syntax highlighting
//!
//! Highlighting reuses the lexer's character-class tables but never fails:
//! characters the lexer would reject are drawn unstyled.

use crate::parser::tables::{self, Keyword, Operator, Quote, Separator};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Highlight a single source line
pub(crate) fn highlight_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        let style = if tables::is_comment_start(c) {
            i = chars.len();
            Style::default().fg(DEFAULT_THEME.comment)
        } else if let Some(quote) = Quote::from_char(c) {
            i += 1;
            while i < chars.len() && chars[i] != quote.as_char() {
                i += 1;
            }
            i = (i + 1).min(chars.len());
            Style::default().fg(DEFAULT_THEME.string)
        } else if c.is_alphabetic() {
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if Keyword::lookup(&word).is_some() {
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.identifier)
            }
        } else if c.is_ascii_digit() {
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            Style::default().fg(DEFAULT_THEME.number)
        } else if Separator::from_char(c).is_some() {
            i += 1;
            Style::default().fg(DEFAULT_THEME.primary)
        } else if Operator::from_char(c).is_some() {
            i += 1;
            Style::default().fg(DEFAULT_THEME.operator)
        } else {
            i += 1;
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let text: String = chars[start..i].iter().collect();
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = super::visible_height(area);
    super::clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_splits_like_the_lexer() {
        let line = highlight_line("print 'a b' + x1 # note");

        assert_eq!(
            span_texts(&line),
            vec!["print", " ", "'a b'", " ", "+", " ", "x1", " ", "# note"]
        );
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(line.spans[6].style.fg, Some(DEFAULT_THEME.identifier));
        assert_eq!(line.spans[8].style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_highlight_tolerates_unknown_characters() {
        let line = highlight_line("@ 'open");

        assert_eq!(span_texts(&line), vec!["@", " ", "'open"]);
    }
}
