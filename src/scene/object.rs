use std::path::{Path, PathBuf};

use glam::Vec3;
use log::{debug, info};

use super::config::{AnimationConfig, ObjectConfig};
use crate::animation::Trajectory;
use crate::core::MeshHandle;
use crate::math::{segment_count, BezierCurve, MIN_CONTROL_POINTS};
use crate::transform::{ObjectTransform, TransformSnapshot};

/// A placed object together with its optional curve
///
/// The trajectory belongs to the object directly, so there is no index to keep
/// aligned between objects and curves.
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    mesh: MeshHandle,
    mesh_path: Option<PathBuf>,
    pub transform: ObjectTransform,
    trajectory: Option<Trajectory>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: MeshHandle, initial: TransformSnapshot) -> Self {
        Self {
            name: name.into(),
            mesh,
            mesh_path: None,
            transform: ObjectTransform::new(initial),
            trajectory: None,
        }
    }

    pub fn with_mesh_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mesh_path = Some(path.into());
        self
    }

    pub fn with_trajectory(mut self, trajectory: Trajectory) -> Self {
        self.trajectory = Some(trajectory);
        self
    }

    /// Build from the scene file entry. `default_resolution` applies when the
    /// animation does not name its own sample count.
    pub fn from_config(mesh: MeshHandle, config: &ObjectConfig, default_resolution: usize) -> Self {
        let mut object = Self::new(config.name.clone(), mesh, config.initial_transform.into());
        object.mesh_path = config.mesh.clone();

        if let AnimationConfig::Bezier {
            control_points,
            speed,
            resolution,
        } = &config.animation
        {
            let points: Vec<Vec3> = control_points.iter().copied().map(Vec3::from_array).collect();
            let resolution = resolution.unwrap_or(default_resolution);

            if points.len() < MIN_CONTROL_POINTS {
                info!(
                    "'{}' has {} control points (need {}); trajectory disabled",
                    config.name,
                    points.len(),
                    MIN_CONTROL_POINTS
                );
            } else if (points.len() - 1) % 3 != 0 {
                debug!(
                    "'{}': {} trailing control points do not complete a segment and are ignored",
                    config.name,
                    points.len() - 1 - segment_count(points.len()) * 3
                );
            }

            let curve = BezierCurve::build(points, resolution);
            debug!(
                "'{}': {} segments, {} samples",
                config.name,
                curve.segment_count(),
                curve.sample_count()
            );
            object.trajectory = Some(Trajectory::new(curve, *speed));
        }

        object
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    pub fn mesh_path(&self) -> Option<&Path> {
        self.mesh_path.as_deref()
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    pub fn trajectory_mut(&mut self) -> Option<&mut Trajectory> {
        self.trajectory.as_mut()
    }

    pub fn is_following(&self) -> bool {
        self.trajectory.as_ref().is_some_and(Trajectory::is_following)
    }

    /// Advance the trajectory by `delta` and move the object onto the curve.
    /// Returns true if the position changed hands to the curve this frame.
    pub fn advance_trajectory(&mut self, delta: f32, speed_scale: f32) -> bool {
        let Some(trajectory) = self.trajectory.as_mut() else {
            return false;
        };
        match trajectory.step(delta, speed_scale) {
            Some(position) => {
                self.transform.set_position(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::config::TransformConfig;

    fn bezier_object(points: Vec<[f32; 3]>) -> ObjectConfig {
        ObjectConfig {
            name: "ship".to_string(),
            mesh: Some(PathBuf::from("ship.obj")),
            initial_transform: TransformConfig::default(),
            animation: AnimationConfig::Bezier {
                control_points: points,
                speed: 0.001,
                resolution: None,
            },
        }
    }

    #[test]
    fn test_static_object_has_no_trajectory() {
        let config = ObjectConfig {
            name: "floor".to_string(),
            mesh: None,
            initial_transform: TransformConfig::default(),
            animation: AnimationConfig::None,
        };
        let object = SceneObject::from_config(MeshHandle(0), &config, 100);
        assert!(object.trajectory().is_none());
        assert!(!object.is_following());
    }

    #[test]
    fn test_bezier_object_uses_default_resolution() {
        let config = bezier_object(vec![[0.0; 3], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        let object = SceneObject::from_config(MeshHandle(3), &config, 25);
        assert_eq!(object.mesh(), MeshHandle(3));
        assert_eq!(object.mesh_path(), Some(Path::new("ship.obj")));
        assert_eq!(object.trajectory().unwrap().curve().sample_count(), 25);
    }

    #[test]
    fn test_short_polygon_keeps_empty_trajectory() {
        let config = bezier_object(vec![[0.0; 3], [1.0, 0.0, 0.0]]);
        let object = SceneObject::from_config(MeshHandle(0), &config, 25);
        let trajectory = object.trajectory().unwrap();
        assert!(!trajectory.is_followable());
    }

    #[test]
    fn test_idle_trajectory_leaves_position() {
        let config = bezier_object(vec![[5.0; 3], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        let mut object = SceneObject::from_config(MeshHandle(0), &config, 25);
        assert!(!object.advance_trajectory(0.1, 100.0));
        assert_eq!(object.transform.position(), Vec3::ZERO);
    }
}
