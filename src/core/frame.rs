/// Elapsed wall-clock seconds since the previous frame.
///
/// Always finite and non-negative: negative or non-finite input collapses
/// to zero, which the movement code treats as "no motion this frame".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FrameDelta(f32);

impl FrameDelta {
    pub const ZERO: FrameDelta = FrameDelta(0.0);

    pub fn from_secs(secs: f32) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs)
        } else {
            Self::ZERO
        }
    }

    pub fn as_secs(self) -> f32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<std::time::Duration> for FrameDelta {
    fn from(d: std::time::Duration) -> Self {
        Self::from_secs(d.as_secs_f32())
    }
}

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: FrameDelta,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: FrameDelta) -> Self {
        Self { number, time, delta }
    }
}
