use glam::{Mat4, Vec3};
use log::trace;

use crate::scene::LightConfig;

/// Opaque handle the renderer uses to find an object's mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub usize);

/// Per-object uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of `model`, for transforming normals
    pub normal: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        // Degenerate scale has no inverse; fall back to identity normals
        let normal = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Phong light uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub ambient: [f32; 3],
    pub _pad2: f32,
    pub diffuse: [f32; 3],
    pub _pad3: f32,
    pub specular: [f32; 3],
    pub _pad4: f32,
}

impl From<&LightConfig> for LightUniform {
    fn from(light: &LightConfig) -> Self {
        Self {
            position: light.position,
            _pad1: 0.0,
            ambient: light.ambient,
            _pad2: 0.0,
            diffuse: light.diffuse,
            _pad3: 0.0,
            specular: light.specular,
            _pad4: 0.0,
        }
    }
}

/// Draw submission seam. Calls are fire-and-forget; backends log their own failures.
pub trait Renderer {
    /// Start a frame with the current camera
    fn begin_frame(&mut self, camera: &CameraUniform);

    /// Set the light used for Phong shading
    fn set_light(&mut self, light: &LightUniform);

    /// Draw one object's mesh
    fn draw_mesh(&mut self, mesh: MeshHandle, uniform: &ModelUniform);

    /// Draw a curve as a line strip
    fn draw_curve(&mut self, points: &[Vec3]);
}

/// Renderer that records and traces submissions instead of drawing
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    frames: u64,
    mesh_draws: u64,
    curve_draws: u64,
    light: Option<LightUniform>,
    last_camera: Option<CameraUniform>,
    last_frame: Vec<(MeshHandle, ModelUniform)>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn mesh_draws(&self) -> u64 {
        self.mesh_draws
    }

    pub fn curve_draws(&self) -> u64 {
        self.curve_draws
    }

    pub fn light(&self) -> Option<&LightUniform> {
        self.light.as_ref()
    }

    pub fn last_camera(&self) -> Option<&CameraUniform> {
        self.last_camera.as_ref()
    }

    /// Meshes submitted since the most recent `begin_frame`
    pub fn last_frame(&self) -> &[(MeshHandle, ModelUniform)] {
        &self.last_frame
    }

    pub fn model_for(&self, mesh: MeshHandle) -> Option<Mat4> {
        self.last_frame
            .iter()
            .find(|(handle, _)| *handle == mesh)
            .map(|(_, uniform)| uniform.model_matrix())
    }
}

impl Renderer for LogRenderer {
    fn begin_frame(&mut self, camera: &CameraUniform) {
        self.frames += 1;
        self.last_frame.clear();
        self.last_camera = Some(*camera);
        trace!("begin frame {} camera at {:?}", self.frames, camera.position);
    }

    fn set_light(&mut self, light: &LightUniform) {
        self.light = Some(*light);
    }

    fn draw_mesh(&mut self, mesh: MeshHandle, uniform: &ModelUniform) {
        self.mesh_draws += 1;
        self.last_frame.push((mesh, *uniform));
        trace!("draw mesh {:?} at {:?}", mesh, uniform.model[3]);
    }

    fn draw_curve(&mut self, points: &[Vec3]) {
        self.curve_draws += 1;
        trace!("draw curve with {} points", points.len());
    }
}
