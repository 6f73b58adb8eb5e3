//! # Introduction
//!
//! dsviz animates classic data structures for learning: a bounded circular queue and
//! singly/doubly linked lists. Every operation is narrated as a short sequence of
//! highlighted steps before its result is committed, and every operation lands in a
//! per-structure log. The engine is hosted by a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! key press → Controller → (busy?) → step plan on a working copy → timed playback
//!           → commit model + log record → UI redraws from the snapshot
//! ```
//!
//! 1. [`model`] — the structures themselves: [`model::queue::Queue`] and the id-keyed
//!    arena behind [`model::list::LinkedList`].
//! 2. [`animation`] — builds the narrated [`animation::Step`] sequence for each mutation
//!    and plays it back with the single-flight [`animation::Animator`].
//! 3. [`oplog`] — append-only [`oplog::OperationLog`].
//! 4. [`controller`] — [`controller::QueueController`] and
//!    [`controller::ListController`], the only API the UI talks to.
//! 5. [`listing`] — illustrative C++ code for the current snapshot.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Rejections
//!
//! Full and empty structures, and dispatches during an animation, are not faults: the
//! operation becomes a no-op and reports an [`errors::Rejection`].

pub mod animation;
pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod listing;
pub mod model;
pub mod oplog;
pub mod ui;
