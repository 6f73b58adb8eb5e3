//! Controller facades
//!
//! The single entry point the UI uses. Each visualizer instance owns one controller,
//! and each controller owns its own [`Session`]: committed model, animator, operation
//! log, and busy flag. Nothing is shared between instances.
//!
//! # Dispatch Contract
//!
//! - While an animation is in flight every dispatcher is a no-op returning
//!   [`Rejection::ConcurrentOperationRejected`]; the request is dropped, not queued.
//! - A full/empty rejection is recorded in the log immediately as a no-op and shown as
//!   the current message; the model is untouched and no animation starts.
//! - An accepted dispatch plays its step sequence. When the last step expires the
//!   post-mutation model is committed and exactly one log record is appended in the
//!   same call, and [`revision`](QueueController::revision) increments once.
//! - After `teardown()` nothing is ever applied again.

pub mod list;
pub mod queue;

pub use list::ListController;
pub use queue::QueueController;

use crate::animation::{Advance, AnimationState, Animator, Plan};
use crate::errors::Rejection;
use crate::oplog::{LogOrder, OperationLog};
use std::hash::Hash;
use std::time::Duration;

/// Instance-scoped state behind a controller
#[derive(Debug)]
pub(crate) struct Session<M, K: Eq + Hash> {
    committed: M,
    animator: Animator<M, K>,
    log: OperationLog,
    state: AnimationState<K>,
    revision: u64,
    torn_down: bool,
}

impl<M: Clone, K: Eq + Hash + Clone> Session<M, K> {
    pub(crate) fn new(model: M, step_duration: Duration, order: LogOrder) -> Self {
        Session {
            committed: model,
            animator: Animator::new(step_duration),
            log: OperationLog::new(order),
            state: AnimationState::default(),
            revision: 0,
            torn_down: false,
        }
    }

    pub(crate) fn committed(&self) -> &M {
        &self.committed
    }

    pub(crate) fn display(&self) -> &M {
        self.animator.preview().unwrap_or(&self.committed)
    }

    pub(crate) fn log(&self) -> &OperationLog {
        &self.log
    }

    pub(crate) fn state(&self) -> &AnimationState<K> {
        &self.state
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub(crate) fn progress(&self) -> Option<(usize, usize)> {
        self.animator.progress()
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Guard, plan against the committed model, then start playback
    pub(crate) fn dispatch<F>(&mut self, build: F) -> Result<(), Rejection>
    where
        F: FnOnce(&M) -> Result<Plan<M, K>, Rejection>,
    {
        if self.torn_down {
            return Err(Rejection::TornDown);
        }
        if self.animator.is_animating() {
            tracing::debug!("dispatch dropped: animation in flight");
            return Err(Rejection::ConcurrentOperationRejected);
        }

        match build(&self.committed) {
            Ok(plan) => {
                tracing::info!(
                    operation = %plan.kind,
                    steps = plan.steps.len(),
                    "animation started"
                );
                self.animator.start(plan)?;
                self.sync_state();
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "operation rejected");
                if let Some(kind) = rejection.logged_operation() {
                    self.log.record_noop(kind, rejection.to_string());
                    self.state = AnimationState::message(rejection.to_string());
                    self.revision += 1;
                }
                Err(rejection)
            }
        }
    }

    /// Advance the animation clock. Returns whether anything visible changed.
    pub(crate) fn tick(&mut self, elapsed: Duration) -> bool {
        if self.torn_down {
            return false;
        }

        match self.animator.advance(elapsed) {
            Advance::Idle | Advance::Holding => false,
            Advance::Stepped => {
                self.sync_state();
                true
            }
            Advance::Finished(done) => {
                self.committed = done.outcome;
                self.log.record(done.kind, done.description);
                self.state.highlighted.clear();
                self.revision += 1;
                tracing::info!(
                    operation = %done.kind,
                    revision = self.revision,
                    "operation committed"
                );
                true
            }
        }
    }

    /// Cancel pending steps and refuse all further work
    pub(crate) fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let cancelled = self.animator.cancel();
        self.torn_down = true;
        tracing::debug!(cancelled, "visualizer torn down");
    }

    fn sync_state(&mut self) {
        if let Some(step) = self.animator.current() {
            self.state = step.state.clone();
        }
    }
}
