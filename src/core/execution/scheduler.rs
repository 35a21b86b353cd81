use std::time::Duration;

/// Host-driven tick clock
///
/// The host reports elapsed wall time and the scheduler answers how many ticks
/// fell due at the current delay. Leftover time carries over to the next call,
/// so a delay change applies from the next tick onwards. Time is kept in whole
/// nanoseconds so that waiting exactly [`TickScheduler::time_until_next_tick`]
/// always makes the next tick due.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    accumulated_ns: u128,
}

/// Delay in whole nanoseconds, never zero
fn delay_nanos(delay_ms: f64) -> u128 {
    ((delay_ms * 1_000_000.0).round() as u128).max(1)
}

impl TickScheduler {
    /// Create a new TickScheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time by `elapsed` and return the number of ticks now due
    pub fn advance_time(&mut self, elapsed: Duration, delay_ms: f64) -> u64 {
        let delay = delay_nanos(delay_ms);
        self.accumulated_ns += elapsed.as_nanos();
        let due = self.accumulated_ns / delay;
        self.accumulated_ns %= delay;
        due as u64
    }

    /// Time left until the next tick at `delay_ms`
    pub fn time_until_next_tick(&self, delay_ms: f64) -> Duration {
        let remaining = delay_nanos(delay_ms).saturating_sub(self.accumulated_ns);
        Duration::from_nanos(remaining as u64)
    }

    /// Drop any partially elapsed interval, as a stopped timer would
    pub fn reset(&mut self) {
        self.accumulated_ns = 0;
    }
}
