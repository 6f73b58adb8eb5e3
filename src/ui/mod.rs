//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, value input, animation clock
//! - **[`panes`]** — stateless render functions for each visible pane (structure,
//!   operations, code listing, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from an [`AppConfig`] and
//! call [`App::run`] to start the event loop.
//!
//! [`AppConfig`]: crate::config::AppConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
