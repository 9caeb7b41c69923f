use std::thread;
use std::time::{Duration, Instant};

/// Frame limiter: each [`Clock::tick`] returns no earlier than one frame
/// after the previous one.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the next frame boundary at `rate` ticks per second and
    /// returns the time since the previous tick. The first call returns
    /// immediately.
    pub fn tick(&mut self, rate: u32) -> Duration {
        let now = Instant::now();
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return Duration::ZERO;
        };

        let wait = remaining(frame_duration(rate), now.duration_since(last_tick));
        if !wait.is_zero() {
            thread::sleep(wait);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now.duration_since(last_tick)
    }
}

/// Length of one frame; a zero rate is treated as one tick per second.
#[must_use]
pub fn frame_duration(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

fn remaining(frame: Duration, elapsed: Duration) -> Duration {
    frame.saturating_sub(elapsed)
}
