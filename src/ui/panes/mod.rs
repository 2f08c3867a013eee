//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with line numbers and table-driven highlighting
//! - [`tokens`]: The token stream, one `Token(...)` per row
//! - [`tree`]: The parsed program as an indented tree
//! - [`status`]: Status bar with keybindings and summary counts
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, the data to show, focus state and a scroll offset.

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible: usize) {
    if total_items > visible {
        *offset = (*offset).min(total_items - visible);
    } else {
        *offset = 0;
    }
}
