//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structure`]: the queue or linked list, highlighted per the current animation step
//! - [`operations`]: the operation log in its configured order
//! - [`code`]: illustrative C++ listing for the current snapshot
//! - [`status`]: status bar with the value input, keybindings and busy indicator
//!
//! Every pane is a stateless `render_*` function that reads controller snapshots; none
//! of them can mutate a model.

pub mod code;
pub mod operations;
pub mod status;
pub mod structure;

pub use code::render_code_pane;
pub use operations::render_operations_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use structure::{render_list_pane, render_queue_pane};
