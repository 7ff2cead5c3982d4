use std::time::Duration;

// Recurring timer driven by the owner's frame clock.
//
// The timer never runs on its own: the event loop feeds it elapsed time and
// it reports whether a firing became due. One advance yields one firing at
// most; time beyond that is folded back into the phase, so the timer never
// drifts and missed firings are never replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        // A zero interval would fire forever inside a single advance
        let interval = interval.max(Duration::from_millis(1));
        Self { interval, elapsed: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Time left before the next firing
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    // Accumulate `dt` and report whether a firing became due
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        // Re-arm for exactly one subsequent firing, keeping only the phase
        let phase = self.elapsed.as_nanos() % self.interval.as_nanos();
        self.elapsed = u64::try_from(phase).map_or(Duration::ZERO, Duration::from_nanos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_secs(5));
        assert!(!timer.advance(Duration::from_secs(4)));
        assert!(timer.advance(Duration::from_secs(1)));
        assert_eq!(timer.remaining(), Duration::from_secs(5));
    }

    #[test]
    fn keeps_phase_across_uneven_frames() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(100));
        assert!(!timer.advance(Duration::from_millis(70)));
        assert!(timer.advance(Duration::from_millis(70)));
        // 40ms carried over, not thrown away
        assert_eq!(timer.remaining(), Duration::from_millis(60));
    }

    #[test]
    fn large_step_fires_once_and_keeps_phase() {
        let mut timer = AutoplayTimer::new(Duration::from_secs(1));
        assert!(timer.advance(Duration::from_millis(2500)));
        // Missed firings are dropped, the phase survives
        assert!(!timer.advance(Duration::ZERO));
        assert_eq!(timer.remaining(), Duration::from_millis(500));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let timer = AutoplayTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }
}
