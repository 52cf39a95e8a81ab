use glam::Vec3;

use crate::math::BezierCurve;

/// Progress multiplier applied on top of `speed * delta`.
pub const DEFAULT_SPEED_SCALE: f32 = 100.0;

/// Whether an object is currently riding its curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrajectoryMode {
    #[default]
    Idle,
    Following,
}

impl TrajectoryMode {
    pub fn toggled(self) -> Self {
        match self {
            TrajectoryMode::Idle => TrajectoryMode::Following,
            TrajectoryMode::Following => TrajectoryMode::Idle,
        }
    }
}

/// Per-object progress along a curve
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryState {
    progress: f32,
    speed: f32,
    mode: TrajectoryMode,
}

impl TrajectoryState {
    pub fn new(speed: f32) -> Self {
        Self {
            progress: 0.0,
            speed,
            mode: TrajectoryMode::Idle,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn mode(&self) -> TrajectoryMode {
        self.mode
    }

    pub fn is_following(&self) -> bool {
        self.mode == TrajectoryMode::Following
    }

    /// Advance progress by one frame and return the new value.
    ///
    /// Leaving `[0, 1)` in either direction, or going non-finite, snaps
    /// progress back to 0.0 and discards the overshoot.
    pub fn advance(&mut self, delta: f32, speed_scale: f32) -> f32 {
        self.progress += self.speed * delta * speed_scale;
        if !(0.0..1.0).contains(&self.progress) {
            self.progress = 0.0;
        }
        self.progress
    }
}

/// Map normalized progress to a sample index, clamped to the last sample.
/// Returns `None` when there are no samples.
pub fn sample_index(progress: f32, sample_count: usize) -> Option<usize> {
    if sample_count == 0 {
        return None;
    }
    // `as usize` saturates negatives and NaN to 0
    let index = (progress * sample_count as f32).floor() as usize;
    Some(index.min(sample_count - 1))
}

/// A curve together with the progress state that walks it
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    curve: BezierCurve,
    state: TrajectoryState,
}

impl Trajectory {
    pub fn new(curve: BezierCurve, speed: f32) -> Self {
        Self {
            curve,
            state: TrajectoryState::new(speed),
        }
    }

    pub fn curve(&self) -> &BezierCurve {
        &self.curve
    }

    pub fn state(&self) -> &TrajectoryState {
        &self.state
    }

    /// Only curves with samples can be followed
    pub fn is_followable(&self) -> bool {
        !self.curve.is_empty()
    }

    pub fn is_following(&self) -> bool {
        self.state.is_following()
    }

    /// Flip between Idle and Following.
    /// Returns the new mode, or `None` if the curve has nothing to follow.
    pub fn toggle(&mut self) -> Option<TrajectoryMode> {
        if !self.is_followable() {
            return None;
        }
        self.state.mode = self.state.mode.toggled();
        Some(self.state.mode)
    }

    /// Advance one frame and return the position to place the object at.
    /// Idle trajectories and empty curves yield `None` and keep their progress.
    pub fn step(&mut self, delta: f32, speed_scale: f32) -> Option<Vec3> {
        if !self.state.is_following() || self.curve.is_empty() {
            return None;
        }
        let progress = self.state.advance(delta, speed_scale);
        sample_index(progress, self.curve.sample_count()).and_then(|i| self.curve.point_at(i))
    }

    /// Sample the object currently sits on
    pub fn current_index(&self) -> Option<usize> {
        sample_index(self.state.progress, self.curve.sample_count())
    }
}
