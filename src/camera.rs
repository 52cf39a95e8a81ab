use glam::{Mat4, Vec3};

use crate::core::CameraUniform;
use crate::scene::CameraConfig;

pub const CAMERA_SPEED: f32 = 0.05;
/// Radians of yaw/pitch per pixel of mouse motion
pub const MOUSE_SENSITIVITY: f32 = 0.002;
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }
}

/// Fly camera: held keys translate, mouse motion turns
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub world_up: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let front = Vec3::from_array(config.front).try_normalize().unwrap_or(Vec3::NEG_Z);
        let world_up = Vec3::from_array(config.up).try_normalize().unwrap_or(Vec3::Y);

        Self {
            position: Vec3::from_array(config.position),
            yaw: front.x.atan2(front.z),
            pitch: front.y.clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT),
            world_up,
            fov: config.fov,
            near: config.near_plane,
            far: config.far_plane,
            movement: MovementState::default(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward()
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or(Vec3::X)
    }

    /// Apply one frame of held-key movement
    pub fn update(&mut self) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();

        let displacement = self.forward() * fwd * CAMERA_SPEED
            + self.right() * right_dir * CAMERA_SPEED
            + self.world_up * up_dir * CAMERA_SPEED;

        self.position += displacement;
    }

    /// Turn by a mouse delta in pixels; pitch stays short of straight up/down
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.world_up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect).to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
