//! The time engine: turns "now" into a `CountdownBreakdown` against the
//! configured interval, with completion as a one-way latch.

use crate::core::breakdown::{CountdownBreakdown, progress_percent};
use crate::core::clock::EpochMillis;
use crate::core::config::CountdownConfig;

pub struct CountdownEngine {
    start: EpochMillis,
    end: EpochMillis,
    complete: bool,
}

impl CountdownEngine {
    pub fn new(config: &CountdownConfig) -> Self {
        Self {
            start: config.start,
            end: config.end,
            complete: false,
        }
    }

    /// Recompute the breakdown for `now`. Once the remaining duration has
    /// hit zero the engine latches: every later call returns the terminal
    /// breakdown, even if the clock were to step backwards.
    pub fn tick(&mut self, now: EpochMillis) -> CountdownBreakdown {
        if self.complete {
            return CountdownBreakdown::complete();
        }
        let remaining = (self.end - now).max(0);
        if remaining == 0 {
            self.complete = true;
            return CountdownBreakdown::complete();
        }
        CountdownBreakdown::from_remaining_millis(
            remaining,
            progress_percent(now, self.start, self.end),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_pre_launch(&self, now: EpochMillis) -> bool {
        !self.complete && now < self.start
    }

    /// Breakdown of the gap until the countdown starts. Zero progress by
    /// definition; clamps to the terminal value once the start has passed.
    pub fn time_until_start(&self, now: EpochMillis) -> CountdownBreakdown {
        CountdownBreakdown::from_remaining_millis((self.start - now).max(0), 0)
    }
}
