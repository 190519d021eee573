//! Keyed timer wheel for the event loop. One-shot and recurring timers
//! are guarded by a per-key version so `Cancel` is idempotent: bumping
//! the version strands every task scheduled under the old one, and
//! cancelling a key that was never armed is a no-op.

use crate::runtime::event::AppEvent;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    EmitNow(AppEvent),
    /// Fire every `period`, first time one period from now, until the
    /// key is cancelled.
    EmitEvery {
        key: String,
        period: Duration,
        event: AppEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    guard: Guard,
    period: Duration,
    event: AppEvent,
}

#[derive(Default)]
pub struct Scheduler {
    ready: VecDeque<AppEvent>,
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(event) => {
                self.ready.push_back(event);
            }
            SchedulerCommand::EmitEvery { key, period, event } => {
                // Re-arming an existing key replaces its schedule.
                let version = self.bump_version(&key);
                self.delayed.push(DelayedTask {
                    due_at: now + period,
                    guard: Guard { key, version },
                    period,
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    /// Collect everything due at `now`. Valid recurring tasks re-arm
    /// themselves one period out from their previous due time, so ticks
    /// do not accumulate drift from late polling.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                if self.task_is_valid(&task) {
                    self.ready.push_back(task.event);
                    // Skip past missed periods instead of replaying them.
                    let mut due_at = task.due_at + task.period;
                    if due_at <= now {
                        due_at = now + task.period;
                    }
                    self.delayed.push(DelayedTask { due_at, ..task });
                }
            } else {
                idx += 1;
            }
        }

        self.ready.drain(..).collect()
    }

    /// How long the event loop may block before the next task is due.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;
        for task in &self.delayed {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }
        next
    }

    fn task_is_valid(&self, task: &DelayedTask) -> bool {
        let current = *self.key_versions.get(&task.guard.key).unwrap_or(&0);
        current == task.guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}
