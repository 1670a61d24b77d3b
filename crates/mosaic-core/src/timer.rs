#![forbid(unsafe_code)]

//! Frame-driven interval timer.
//!
//! The frame loop feeds elapsed time into [`IntervalTimer::advance`], which
//! reports how many periods completed. Start and stop are idempotent.
//!
//! # Example
//! ```
//! use mosaic_core::timer::IntervalTimer;
//! use std::time::Duration;
//!
//! let mut timer = IntervalTimer::new("grid", Duration::from_millis(800));
//! timer.start();
//! assert_eq!(timer.advance(Duration::from_millis(1700)), 2);
//! timer.stop();
//! timer.stop();
//! assert_eq!(timer.advance(Duration::from_secs(5)), 0);
//! ```

use std::time::Duration;

/// A stoppable periodic timer driven by elapsed frame time.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    name: &'static str,
    period: Duration,
    elapsed: Duration,
    running: bool,
    fired: u64,
}

impl IntervalTimer {
    /// Create a stopped timer. A zero period is raised to one millisecond.
    #[must_use]
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            running: false,
            fired: 0,
        }
    }

    /// Timer name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Firing period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer is running.
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Total firings since creation.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start the timer. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
        tracing::debug!(timer = self.name, period_ms = self.period.as_millis() as u64, "timer started");
        true
    }

    /// Stop the timer. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
        tracing::debug!(timer = self.name, fired = self.fired, "timer stopped");
        true
    }

    /// Flip between running and stopped. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Feed elapsed time; returns the number of periods that completed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let mut count = 0u32;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            count = count.saturating_add(1);
        }
        self.fired += u64::from(count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut t = IntervalTimer::new("t", ms(100));
        assert_eq!(t.advance(ms(1000)), 0);
        assert_eq!(t.fired(), 0);
    }

    #[test]
    fn accumulates_partial_periods() {
        let mut t = IntervalTimer::new("t", ms(400));
        t.start();
        assert_eq!(t.advance(ms(250)), 0);
        assert_eq!(t.advance(ms(250)), 1);
        assert_eq!(t.advance(ms(300)), 1);
        assert_eq!(t.fired(), 2);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut t = IntervalTimer::new("t", ms(100));
        assert!(t.start());
        assert!(!t.start());
        assert!(t.stop());
        assert!(!t.stop());
        assert!(!t.running());
    }

    #[test]
    fn restart_discards_partial_progress() {
        let mut t = IntervalTimer::new("t", ms(100));
        t.start();
        t.advance(ms(90));
        t.stop();
        t.start();
        assert_eq!(t.advance(ms(20)), 0);
    }

    #[test]
    fn toggle_flips_state() {
        let mut t = IntervalTimer::new("t", ms(100));
        assert!(t.toggle());
        assert!(!t.toggle());
    }

    #[test]
    fn zero_period_is_clamped() {
        let t = IntervalTimer::new("t", Duration::ZERO);
        assert_eq!(t.period(), ms(1));
    }
}
