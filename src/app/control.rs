use std::time::{Duration, Instant};

/// Upper bound on catch-up ticks after a long stall (window dragged,
/// machine asleep), the rest of the missed time is dropped.
const MAX_CATCH_UP: usize = 4;

/// Decides how many simulation ticks are due on a given frame.
///
/// Rendering runs every frame, the game advances only when enough time
/// has accumulated. Leftover time is carried over so the effective
/// tick rate stays accurate across frames.
pub struct Control {
    tick_interval: Duration,
    last_update: Instant,
    /// Time which game ticks have not yet been accounted for.
    remainder: Duration,
}

impl Control {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_update: Instant::now(),
            remainder: Duration::ZERO,
        }
    }

    pub fn set_tick_interval(&mut self, tick_interval: Duration) {
        self.tick_interval = tick_interval;
    }

    /// Number of ticks to run to catch up with `now`.
    pub fn num_updates(&mut self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.last_update) + self.remainder;
        self.last_update = now;

        let due = (elapsed.as_nanos() / self.tick_interval.as_nanos()) as usize;
        if due > MAX_CATCH_UP {
            self.remainder = Duration::ZERO;
            MAX_CATCH_UP
        } else {
            self.remainder = elapsed - self.tick_interval * due as u32;
            due
        }
    }

    /// Forget accumulated time, used when resuming from pause.
    pub fn reset(&mut self, now: Instant) {
        self.last_update = now;
        self.remainder = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn accumulates_whole_ticks() {
        let mut control = Control::new(TICK);
        let start = Instant::now();
        control.reset(start);

        assert_eq!(control.num_updates(start + Duration::from_millis(50)), 0);
        // the 50ms remainder carries over: 50 + 160 = 2 ticks + 10 left
        assert_eq!(control.num_updates(start + Duration::from_millis(210)), 2);
        assert_eq!(control.num_updates(start + Duration::from_millis(305)), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut control = Control::new(TICK);
        let start = Instant::now();
        control.reset(start);

        assert_eq!(control.num_updates(start + Duration::from_secs(60)), MAX_CATCH_UP);
        // dropped, not deferred
        assert_eq!(control.num_updates(start + Duration::from_secs(60)), 0);
    }

    #[test]
    fn reset_forgets_the_past() {
        let mut control = Control::new(TICK);
        let start = Instant::now();
        control.reset(start);

        control.num_updates(start + Duration::from_millis(90));
        control.reset(start + Duration::from_millis(200));
        assert_eq!(control.num_updates(start + Duration::from_millis(250)), 0);
    }
}
