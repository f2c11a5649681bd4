//! Debounced scheduling with explicit, replaceable task handles.

use std::time::{Duration, Instant};

/// Identity of a scheduled task. Every [`Debouncer::schedule`] call mints a
/// new id, so a stale id never matches the pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A pending task: fires once `due` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Handle minted when the task was scheduled.
    pub id: TaskId,
    /// Earliest instant the task may fire.
    pub due: Instant,
}

/// Coalesces bursts of triggers into a single firing after a quiet window.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
    next_id: u64,
}

impl Debouncer {
    /// Debouncer with nothing pending.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_id: 0,
        }
    }

    /// Quiet window between the last trigger and the firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a firing `delay` after `now`, replacing any pending task.
    pub fn schedule(&mut self, now: Instant) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending = Some(ScheduledTask {
            id,
            due: now + self.delay,
        });
        id
    }

    /// Cancel the pending task. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire the pending task if it is due, clearing it.
    pub fn poll(&mut self, now: Instant) -> Option<TaskId> {
        match self.pending {
            Some(task) if now >= task.due => {
                self.pending = None;
                Some(task.id)
            }
            _ => None,
        }
    }

    /// Task waiting to fire, if any.
    pub fn pending(&self) -> Option<ScheduledTask> {
        self.pending
    }

    /// Whether a task is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
