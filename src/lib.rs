pub mod animation;
pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod math;
pub mod scene;
pub mod transform;

pub use animation::{Trajectory, TrajectoryMode, TrajectoryState};
pub use app::{AppOptions, AppState};
pub use math::BezierCurve;
pub use scene::{load_scene, SceneConfig, SceneError, SceneObject};
pub use transform::{ObjectTransform, RotationAxis, TransformSnapshot};
