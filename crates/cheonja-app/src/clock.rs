//! One-second game ticks derived from the UI frame clock.

use std::time::Duration;

const TICK_SECS: f64 = 1.0;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TickClock {
    last_tick: Option<f64>,
}

impl TickClock {
    /// Returns how many whole seconds passed since the last tick.
    ///
    /// The clock only runs while `running` is set; stopping it drops any
    /// partial second.
    pub(crate) fn advance(&mut self, now: f64, running: bool) -> u32 {
        if !running {
            self.last_tick = None;
            return 0;
        }
        let last_tick = self.last_tick.get_or_insert(now);
        let mut ticks = 0;
        while now - *last_tick >= TICK_SECS {
            *last_tick += TICK_SECS;
            ticks += 1;
        }
        ticks
    }

    /// Time left until the next tick, if the clock is running.
    pub(crate) fn until_next_tick(&self, now: f64) -> Option<Duration> {
        let last_tick = self.last_tick?;
        let remaining = (last_tick + TICK_SECS - now).max(0.0);
        Some(Duration::from_secs_f64(remaining))
    }
}
