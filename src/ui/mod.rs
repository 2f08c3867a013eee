//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   tokens, syntax tree, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] from the source text, its tokens and the parsed
//! [`Program`] and call [`App::run`] to start the event loop.
//!
//! [`Program`]: crate::parser::ast::Program
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
