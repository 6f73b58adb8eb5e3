//! Animation sequencing
//!
//! A mutation is narrated as a finite list of [`Step`]s computed up front against a
//! working copy of the model (see [`queue_steps`] and [`list_steps`]). The [`Animator`]
//! then plays that list back on a host-driven clock:
//!
//! ```text
//! Idle --start(plan)--> Animating --advance(dt) ... last step expires--> Idle
//!                           |
//!                           +--cancel()--> Idle (plan discarded)
//! ```
//!
//! The animator never sleeps or spawns timers. Whoever hosts it (the TUI loop, a test)
//! calls [`Animator::advance`] with the elapsed time, so step sequences can be tested
//! without a clock.

pub mod list_steps;
pub mod queue_steps;

use crate::errors::Rejection;
use crate::oplog::OperationKind;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::time::Duration;

/// Which model a step should be drawn against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The committed, pre-mutation model
    Before,
    /// The post-mutation working copy
    After,
}

/// What is shown to the user at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState<K: Eq + Hash> {
    pub highlighted: FxHashSet<K>,
    pub message: String,
}

impl<K: Eq + Hash> AnimationState<K> {
    /// State with a message and nothing highlighted
    pub fn message(message: impl Into<String>) -> Self {
        AnimationState {
            highlighted: FxHashSet::default(),
            message: message.into(),
        }
    }

    pub fn is_highlighted(&self, key: &K) -> bool {
        self.highlighted.contains(key)
    }
}

impl<K: Eq + Hash> Default for AnimationState<K> {
    fn default() -> Self {
        Self::message("")
    }
}

/// One frame of a narrated mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<K: Eq + Hash> {
    pub state: AnimationState<K>,
    pub stage: Stage,
}

impl<K: Eq + Hash> Step<K> {
    pub fn new(
        stage: Stage,
        highlighted: impl IntoIterator<Item = K>,
        message: impl Into<String>,
    ) -> Self {
        Step {
            state: AnimationState {
                highlighted: highlighted.into_iter().collect(),
                message: message.into(),
            },
            stage,
        }
    }
}

/// A fully computed mutation: its narration and its result
#[derive(Debug, Clone)]
pub struct Plan<M, K: Eq + Hash> {
    pub steps: Vec<Step<K>>,
    pub outcome: M,
    pub kind: OperationKind,
    pub description: String,
}

/// Result of a finished animation, ready to be committed
#[derive(Debug, Clone)]
pub struct Completion<M> {
    pub outcome: M,
    pub kind: OperationKind,
    pub description: String,
}

/// What happened during one [`Animator::advance`] call
#[derive(Debug)]
pub enum Advance<M> {
    /// Nothing is animating
    Idle,
    /// Still on the same step
    Holding,
    /// Moved on to a later step
    Stepped,
    /// Sequence exhausted; the outcome must now be committed
    Finished(Completion<M>),
}

#[derive(Debug)]
struct Playback<M, K: Eq + Hash> {
    plan: Plan<M, K>,
    elapsed: Duration,
}

impl<M, K: Eq + Hash> Playback<M, K> {
    fn cursor(&self, step_duration: Duration) -> usize {
        (self.elapsed.as_nanos() / step_duration.as_nanos().max(1)) as usize
    }
}

/// Single-flight step player
#[derive(Debug)]
pub struct Animator<M, K: Eq + Hash> {
    step_duration: Duration,
    playback: Option<Playback<M, K>>,
}

impl<M, K: Eq + Hash> Animator<M, K> {
    pub fn new(step_duration: Duration) -> Self {
        Animator {
            step_duration,
            playback: None,
        }
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// Begin playing a plan. Rejected while another plan is in flight.
    pub fn start(&mut self, plan: Plan<M, K>) -> Result<(), Rejection> {
        if self.playback.is_some() {
            return Err(Rejection::ConcurrentOperationRejected);
        }
        debug_assert!(!plan.steps.is_empty(), "plans always narrate at least one step");
        self.playback = Some(Playback {
            plan,
            elapsed: Duration::ZERO,
        });
        Ok(())
    }

    /// Step currently on screen
    pub fn current(&self) -> Option<&Step<K>> {
        let playback = self.playback.as_ref()?;
        playback.plan.steps.get(playback.cursor(self.step_duration))
    }

    /// Index of the current step and the total number of steps
    pub fn progress(&self) -> Option<(usize, usize)> {
        let playback = self.playback.as_ref()?;
        let total = playback.plan.steps.len();
        Some((playback.cursor(self.step_duration).min(total.saturating_sub(1)), total))
    }

    /// Working copy to draw when the current step is past the mutation
    pub fn preview(&self) -> Option<&M> {
        let playback = self.playback.as_ref()?;
        match self.current()?.stage {
            Stage::After => Some(&playback.plan.outcome),
            Stage::Before => None,
        }
    }

    /// Move the clock forward
    pub fn advance(&mut self, elapsed: Duration) -> Advance<M> {
        let step_duration = self.step_duration;
        let Some(playback) = self.playback.as_mut() else {
            return Advance::Idle;
        };

        let before = playback.cursor(step_duration);
        playback.elapsed += elapsed;
        let after = playback.cursor(step_duration);

        if after >= playback.plan.steps.len() {
            return match self.playback.take() {
                Some(done) => Advance::Finished(Completion {
                    outcome: done.plan.outcome,
                    kind: done.plan.kind,
                    description: done.plan.description,
                }),
                None => Advance::Idle,
            };
        }

        if after != before {
            tracing::trace!(step = after, "animation step");
            Advance::Stepped
        } else {
            Advance::Holding
        }
    }

    /// Drop the plan in flight without committing it. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        self.playback.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(steps: usize) -> Plan<u32, usize> {
        Plan {
            steps: (0..steps)
                .map(|i| {
                    let stage = if i == 0 { Stage::Before } else { Stage::After };
                    Step::new(stage, [i], format!("step {}", i))
                })
                .collect(),
            outcome: 42,
            kind: OperationKind::Enqueue,
            description: "Enqueued 42".to_string(),
        }
    }

    #[test]
    fn test_plays_each_step_for_one_duration() {
        let mut animator = Animator::new(Duration::from_millis(100));
        animator.start(plan(3)).unwrap();
        assert_eq!(animator.current().unwrap().state.message, "step 0");
        assert!(animator.preview().is_none());

        assert!(matches!(animator.advance(Duration::from_millis(99)), Advance::Holding));
        assert!(matches!(animator.advance(Duration::from_millis(1)), Advance::Stepped));
        assert_eq!(animator.current().unwrap().state.message, "step 1");
        assert_eq!(animator.preview(), Some(&42));

        assert!(matches!(animator.advance(Duration::from_millis(100)), Advance::Stepped));
        match animator.advance(Duration::from_millis(100)) {
            Advance::Finished(done) => assert_eq!(done.outcome, 42),
            other => panic!("Expected Finished, got {:?}", other),
        }
        assert!(!animator.is_animating());
        assert!(matches!(animator.advance(Duration::from_millis(100)), Advance::Idle));
    }

    #[test]
    fn test_large_tick_finishes_immediately() {
        let mut animator = Animator::new(Duration::from_millis(100));
        animator.start(plan(5)).unwrap();

        assert!(matches!(animator.advance(Duration::from_secs(10)), Advance::Finished(_)));
    }

    #[test]
    fn test_rejects_second_plan_while_busy() {
        let mut animator = Animator::new(Duration::from_millis(100));
        animator.start(plan(2)).unwrap();

        assert_eq!(animator.start(plan(2)), Err(Rejection::ConcurrentOperationRejected));
        assert_eq!(animator.progress(), Some((0, 2)));
    }

    #[test]
    fn test_cancel_discards_plan() {
        let mut animator = Animator::new(Duration::from_millis(100));
        animator.start(plan(2)).unwrap();

        assert!(animator.cancel());
        assert!(!animator.cancel());
        assert!(matches!(animator.advance(Duration::from_secs(1)), Advance::Idle));
    }
}
