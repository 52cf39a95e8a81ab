use std::time::Instant;

/// Frame metadata - carries frame number and timing info
///
/// `delta` is sampled once per frame and shared by everything updated in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the loop started
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields wall-clock frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Deterministic frame source with a constant delta, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    frame_number: u64,
    delta: f32,
}

impl FixedStepFrames {
    pub fn new(delta: f32) -> Self {
        Self {
            frame_number: 0,
            delta,
        }
    }

    /// Frames spaced for the given rate
    pub fn at_hz(hz: f32) -> Self {
        Self::new(1.0 / hz)
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let number = self.frame_number;
        self.frame_number += 1;
        // First frame has no predecessor
        let delta = if number == 0 { 0.0 } else { self.delta };
        Some(FrameInfo::new(number, number as f32 * self.delta, delta))
    }
}
