use glam::{Mat4, Vec3};

/// Axis the selected object spins around. At most one is armed at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationAxis {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Unit vector for the axis, `None` when disarmed
    pub fn unit(self) -> Option<Vec3> {
        match self {
            RotationAxis::None => None,
            RotationAxis::X => Some(Vec3::X),
            RotationAxis::Y => Some(Vec3::Y),
            RotationAxis::Z => Some(Vec3::Z),
        }
    }

    pub fn is_armed(self) -> bool {
        self != RotationAxis::None
    }
}

/// Placement values for one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub position: Vec3,
    /// Static rotation in degrees
    pub rotation_angle: f32,
    pub rotation_axis: Vec3,
    pub scale: Vec3,
}

impl Default for TransformSnapshot {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_angle: 0.0,
            rotation_axis: Vec3::Y,
            scale: Vec3::ONE,
        }
    }
}

/// Mutable transform of a scene object plus the load-time snapshot it resets to
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTransform {
    initial: TransformSnapshot,
    current: TransformSnapshot,
    spin_axis: RotationAxis,
}

impl ObjectTransform {
    pub fn new(initial: TransformSnapshot) -> Self {
        Self {
            initial,
            current: initial,
            spin_axis: RotationAxis::None,
        }
    }

    pub fn initial(&self) -> &TransformSnapshot {
        &self.initial
    }

    pub fn current(&self) -> &TransformSnapshot {
        &self.current
    }

    pub fn position(&self) -> Vec3 {
        self.current.position
    }

    pub fn scale(&self) -> Vec3 {
        self.current.scale
    }

    pub fn spin_axis(&self) -> RotationAxis {
        self.spin_axis
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.current.position = position;
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.current.position += delta;
    }

    /// Component-wise scale. Unbounded: repeated shrinking approaches zero size.
    pub fn scale_by(&mut self, factor: Vec3) {
        self.current.scale *= factor;
    }

    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale_by(Vec3::splat(factor));
    }

    /// Arm `axis`, replacing whichever axis was armed before
    pub fn arm_rotation(&mut self, axis: RotationAxis) {
        self.spin_axis = axis;
    }

    pub fn clear_rotation(&mut self) {
        self.spin_axis = RotationAxis::None;
    }

    /// Restore position, rotation and scale from the load-time snapshot and stop spinning
    pub fn reset_to_initial(&mut self) {
        self.current = self.initial;
        self.spin_axis = RotationAxis::None;
    }

    /// Compose translate * static rotation * scale * spin.
    ///
    /// `spin_time` is the elapsed time in seconds used as the spin angle in radians;
    /// pass `None` for objects that are not selected.
    pub fn model_matrix(&self, spin_time: Option<f32>) -> Mat4 {
        let mut model = Mat4::from_translation(self.current.position);

        if self.current.rotation_angle != 0.0 {
            if let Some(axis) = self.current.rotation_axis.try_normalize() {
                model *= Mat4::from_axis_angle(axis, self.current.rotation_angle.to_radians());
            }
        }

        model *= Mat4::from_scale(self.current.scale);

        if let (Some(time), Some(axis)) = (spin_time, self.spin_axis.unit()) {
            model *= Mat4::from_axis_angle(axis, time);
        }

        model
    }
}
