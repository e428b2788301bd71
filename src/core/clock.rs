use std::time::Instant;

use super::frame::{FrameDelta, FrameInfo};

/// Frame clock - tracks delta time and frame count for the host's loop
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Get delta time since last tick and advance clock
    pub fn tick(&mut self) -> FrameDelta {
        self.next_frame().delta
    }

    /// Advance the clock and describe the frame that just started
    pub fn next_frame(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = FrameDelta::from(now.duration_since(self.last_tick));
        let time = now.duration_since(self.start).as_secs_f32();
        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_tick = now;
        info
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }

    /// Reset clock to current time, e.g. after the window regains focus so
    /// the pause does not turn into one long step
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick().as_secs();

        // Sleep only guarantees a lower bound
        assert!(delta >= 0.009);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick().as_secs();
        assert!(delta < 0.009);
    }

    #[test]
    fn clock_counts_frames() {
        let mut clock = Clock::new();
        let first = clock.next_frame();
        let second = clock.next_frame();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert_eq!(clock.frame_count(), 2);
        assert!(second.time >= first.time);
    }
}
