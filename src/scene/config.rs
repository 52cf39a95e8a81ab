use std::path::PathBuf;

use glam::Vec3;
use serde::Deserialize;

use crate::transform::TransformSnapshot;

/// Root of the scene JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light_sources: Vec<LightConfig>,
    pub objects: Vec<ObjectConfig>,
}

/// Initial camera placement and projection
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub front: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            front: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

/// Point light with Phong terms
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LightConfig {
    pub position: [f32; 3],
    #[serde(default = "default_ambient")]
    pub ambient: [f32; 3],
    #[serde(default = "default_diffuse")]
    pub diffuse: [f32; 3],
    #[serde(default = "default_specular")]
    pub specular: [f32; 3],
}

fn default_ambient() -> [f32; 3] {
    [0.2, 0.2, 0.2]
}

fn default_diffuse() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

fn default_specular() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// One placeable object
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    /// Mesh file handed to the renderer; not read by this crate
    #[serde(default)]
    pub mesh: Option<PathBuf>,
    #[serde(default)]
    pub initial_transform: TransformConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub position: [f32; 3],
    /// Degrees
    pub rotation_angle: f32,
    pub rotation_axis: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation_angle: 0.0,
            rotation_axis: [0.0, 1.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl From<TransformConfig> for TransformSnapshot {
    fn from(config: TransformConfig) -> Self {
        TransformSnapshot {
            position: Vec3::from_array(config.position),
            rotation_angle: config.rotation_angle,
            rotation_axis: Vec3::from_array(config.rotation_axis),
            scale: Vec3::from_array(config.scale),
        }
    }
}

/// Animation descriptor, tagged by `"type"`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnimationConfig {
    #[default]
    None,
    Bezier {
        control_points: Vec<[f32; 3]>,
        #[serde(default)]
        speed: f32,
        /// Sample count; falls back to the command-line default
        #[serde(default)]
        resolution: Option<usize>,
    },
}

impl AnimationConfig {
    pub fn is_bezier(&self) -> bool {
        matches!(self, AnimationConfig::Bezier { .. })
    }
}
