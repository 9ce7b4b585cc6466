use crate::speed::Fps;

/// Throttles a display-rate frame callback down to the configured fps.
///
/// Timestamps are milliseconds from any monotonic origin
/// (`performance.now()` in the browser, an `Instant` offset on native).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePacer {
    interval_ms: f64,
    last_ms: f64,
}

impl FramePacer {
    pub fn new(fps: Fps, now_ms: f64) -> Self {
        Self {
            interval_ms: fps.frame_interval_ms(),
            last_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// True when a step is due at `now_ms`.
    ///
    /// The remainder of the elapsed time is carried forward so the average rate
    /// holds even though callbacks land on display refresh boundaries. A long
    /// stall still yields a single step.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_ms;
        if elapsed >= self.interval_ms {
            self.last_ms = now_ms - (elapsed % self.interval_ms);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps(v: u32) -> Fps {
        Fps::new(v).unwrap()
    }

    #[test]
    fn nothing_due_before_interval() {
        let mut p = FramePacer::new(fps(10), 1000.0);
        assert!(!p.poll(1000.0));
        assert!(!p.poll(1099.9));
        assert!(p.poll(1100.0));
        assert!(!p.poll(1100.0));
    }

    #[test]
    fn remainder_carries_forward() {
        // 50 fps -> 20ms. A callback at +25ms leaves 5ms of credit.
        let mut p = FramePacer::new(fps(50), 0.0);
        assert!(p.poll(25.0));
        assert!(!p.poll(39.0));
        assert!(p.poll(40.0));
    }

    #[test]
    fn stall_yields_one_step() {
        let mut p = FramePacer::new(fps(100), 0.0);
        assert!(p.poll(1000.0));
        assert!(!p.poll(1000.0));
        assert!(p.poll(1010.0));
    }

    #[test]
    fn sixty_hz_callbacks_average_to_target_rate() {
        let mut p = FramePacer::new(fps(30), 0.0);
        let frame = 1000.0 / 60.0;
        let steps = (1..=600).filter(|i| p.poll(*i as f64 * frame)).count();
        // 10 seconds at 30 fps.
        assert!((299..=300).contains(&steps), "steps = {steps}");
    }
}
