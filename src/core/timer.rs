use super::frame::FrameDelta;

/// Throttled timer - minimum interval between fires.
/// Used to keep periodic status logging off the per-frame path.
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval in seconds
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Accumulate a frame, returns true once at least `min_interval` has passed
    pub fn try_tick(&mut self, delta: FrameDelta) -> bool {
        self.time_since_last += delta.as_secs();

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(0.1);

        assert!(!timer.try_tick(FrameDelta::from_secs(0.05)));
        assert!(timer.try_tick(FrameDelta::from_secs(0.06)));
        assert!(!timer.try_tick(FrameDelta::from_secs(0.05)));
    }

    #[test]
    fn throttled_ignores_zero_frames() {
        let mut timer = Throttled::new(0.1);
        for _ in 0..100 {
            assert!(!timer.try_tick(FrameDelta::ZERO));
        }
    }
}
