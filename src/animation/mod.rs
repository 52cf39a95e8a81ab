// Curve following for animated scene objects

pub mod trajectory;

pub use trajectory::{
    sample_index, Trajectory, TrajectoryMode, TrajectoryState, DEFAULT_SPEED_SCALE,
};
