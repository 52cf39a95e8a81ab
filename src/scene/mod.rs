// Scene description: JSON config, validation and placed objects

mod config;
mod error;
mod object;

pub use config::{
    AnimationConfig, CameraConfig, LightConfig, ObjectConfig, SceneConfig, TransformConfig,
};
pub use error::SceneError;
pub use object::SceneObject;

use std::path::Path;

use log::info;

use crate::app::MIN_CURVE_RESOLUTION;

/// Read, parse and validate a scene file
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneConfig, SceneError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scene: SceneConfig = serde_json::from_str(&text).map_err(|source| SceneError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    scene.validate()?;

    info!(
        "Loaded scene {:?}: {} objects, {} lights",
        path,
        scene.objects.len(),
        scene.light_sources.len()
    );
    Ok(scene)
}

impl SceneConfig {
    /// Parse and validate scene JSON held in memory
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let scene: SceneConfig = serde_json::from_str(text).map_err(|source| SceneError::Parse {
            path: "<memory>".into(),
            source,
        })?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reject configurations the frame loop cannot run with
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.objects.is_empty() {
            return Err(SceneError::Invalid("scene has no objects".to_string()));
        }

        self.camera.validate()?;

        for (index, light) in self.light_sources.iter().enumerate() {
            let values = light
                .position
                .iter()
                .chain(&light.ambient)
                .chain(&light.diffuse)
                .chain(&light.specular);
            if !all_finite(values) {
                return Err(SceneError::Invalid(format!(
                    "light {index} has non-finite values"
                )));
            }
        }

        for object in &self.objects {
            object.validate()?;
        }
        Ok(())
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), SceneError> {
        let values = self
            .position
            .iter()
            .chain(&self.front)
            .chain(&self.up)
            .chain([&self.fov, &self.near_plane, &self.far_plane]);
        if !all_finite(values) {
            return Err(SceneError::Invalid("camera has non-finite values".to_string()));
        }
        if is_zero(self.front) || is_zero(self.up) {
            return Err(SceneError::Invalid(
                "camera front and up must be non-zero".to_string(),
            ));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::Invalid(format!(
                "camera fov {} outside (0, 180)",
                self.fov
            )));
        }
        if !(self.near_plane > 0.0 && self.far_plane > self.near_plane) {
            return Err(SceneError::Invalid(format!(
                "camera planes near={} far={} must satisfy 0 < near < far",
                self.near_plane, self.far_plane
            )));
        }
        Ok(())
    }
}

impl ObjectConfig {
    fn validate(&self) -> Result<(), SceneError> {
        let t = &self.initial_transform;
        let values = t
            .position
            .iter()
            .chain(&t.rotation_axis)
            .chain(&t.scale)
            .chain([&t.rotation_angle]);
        if !all_finite(values) {
            return Err(SceneError::invalid_object(&self.name, "non-finite transform"));
        }
        if t.scale.iter().any(|s| *s == 0.0) {
            return Err(SceneError::invalid_object(&self.name, "scale components must be non-zero"));
        }
        if is_zero(t.rotation_axis) {
            return Err(SceneError::invalid_object(&self.name, "rotation axis must be non-zero"));
        }

        if let AnimationConfig::Bezier {
            control_points,
            speed,
            resolution,
        } = &self.animation
        {
            if !all_finite(control_points.iter().flatten()) {
                return Err(SceneError::invalid_object(&self.name, "non-finite control point"));
            }
            if !speed.is_finite() || *speed < 0.0 {
                return Err(SceneError::invalid_object(
                    &self.name,
                    format!("speed {speed} must be finite and non-negative"),
                ));
            }
            if let Some(resolution) = resolution {
                if *resolution < MIN_CURVE_RESOLUTION {
                    return Err(SceneError::invalid_object(
                        &self.name,
                        format!("resolution {resolution} must be at least {MIN_CURVE_RESOLUTION}"),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn all_finite<'a>(mut values: impl Iterator<Item = &'a f32>) -> bool {
    values.all(|v| v.is_finite())
}

fn is_zero(v: [f32; 3]) -> bool {
    v.iter().all(|c| *c == 0.0)
}
