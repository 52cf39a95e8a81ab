use log::{debug, info, warn};

use crate::animation::{TrajectoryMode, DEFAULT_SPEED_SCALE};
use crate::camera::Camera;
use crate::core::{Command, FrameInfo, LightUniform, MeshHandle, ModelUniform, Renderer};
use crate::scene::{SceneConfig, SceneObject};
use crate::transform::RotationAxis;

/// Default number of samples per curve when the scene does not say
pub const DEFAULT_CURVE_RESOLUTION: usize = 100;
/// Smallest sample count that still reaches both curve endpoints
pub const MIN_CURVE_RESOLUTION: usize = 2;

/// Tunables applied when building state from a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppOptions {
    pub curve_resolution: usize,
    pub speed_scale: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            speed_scale: DEFAULT_SPEED_SCALE,
        }
    }
}

/// Everything the frame loop mutates: objects, selection and lights
///
/// Per frame the loop applies drained commands, then `update`, then `render`.
#[derive(Debug, Clone)]
pub struct AppState {
    objects: Vec<SceneObject>,
    lights: Vec<LightUniform>,
    selected: usize,
    speed_scale: f32,
    quit: bool,
}

impl AppState {
    pub fn new(objects: Vec<SceneObject>, lights: Vec<LightUniform>, speed_scale: f32) -> Self {
        Self {
            objects,
            lights,
            selected: 0,
            speed_scale,
            quit: false,
        }
    }

    /// Build state from a validated scene. A `curve_resolution` below
    /// `MIN_CURVE_RESOLUTION` is raised to it.
    pub fn from_scene(scene: &SceneConfig, options: &AppOptions) -> Self {
        let resolution = options.curve_resolution.max(MIN_CURVE_RESOLUTION);
        let objects = scene
            .objects
            .iter()
            .enumerate()
            .map(|(index, config)| {
                SceneObject::from_config(MeshHandle(index), config, resolution)
            })
            .collect();
        let lights = scene.light_sources.iter().map(LightUniform::from).collect();
        Self::new(objects, lights, options.speed_scale)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn lights(&self) -> &[LightUniform] {
        &self.lights
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.objects.get(self.selected)
    }

    fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.get_mut(self.selected)
    }

    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply commands in order
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Apply one user command. Commands that target a missing object are ignored.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Select(index) => self.select(index),
            Command::Quit => self.quit = true,
            Command::Translate(delta) => {
                if let Some(object) = self.selected_mut() {
                    object.transform.translate(delta);
                }
            }
            Command::Scale(factor) => {
                if let Some(object) = self.selected_mut() {
                    object.transform.scale_uniform(factor);
                }
            }
            Command::ArmRotation(axis) => {
                if let Some(object) = self.selected_mut() {
                    object.transform.arm_rotation(axis);
                }
            }
            Command::ToggleTrajectory => self.toggle_trajectory(),
            Command::Reset => {
                if let Some(object) = self.selected_mut() {
                    object.transform.reset_to_initial();
                    info!("Transform of '{}' reset", object.name());
                }
            }
        }
    }

    fn select(&mut self, index: usize) {
        if index >= self.objects.len() {
            warn!(
                "Ignoring selection {} (scene has {} objects)",
                index + 1,
                self.objects.len()
            );
            return;
        }

        // Previous selection stops spinning
        if let Some(previous) = self.selected_mut() {
            previous.transform.clear_rotation();
        }
        self.selected = index;
        info!("Selected object: {}", self.objects[index].name());
    }

    fn toggle_trajectory(&mut self) {
        let Some(object) = self.objects.get_mut(self.selected) else {
            return;
        };
        let name = object.name().to_string();

        let Some(trajectory) = object.trajectory_mut() else {
            info!("No Bezier trajectory defined for '{name}'");
            return;
        };

        match trajectory.toggle() {
            Some(TrajectoryMode::Following) => info!("Trajectory for '{name}' enabled"),
            Some(TrajectoryMode::Idle) => info!("Trajectory for '{name}' disabled"),
            None => info!("Trajectory for '{name}' has no samples; ignoring toggle"),
        }
    }

    /// Advance every following object using this frame's single delta
    pub fn update(&mut self, frame: &FrameInfo) {
        let delta = frame.delta;
        let speed_scale = self.speed_scale;
        for object in &mut self.objects {
            if object.advance_trajectory(delta, speed_scale) {
                debug!(
                    "frame {}: '{}' at {:?}",
                    frame.number,
                    object.name(),
                    object.transform.position()
                );
            }
        }
    }

    /// Model matrix for object `index` as it would be drawn at `time`.
    /// Only the selected object spins.
    pub fn model_matrix(&self, index: usize, time: f32) -> Option<glam::Mat4> {
        let object = self.objects.get(index)?;
        let spin_time = (index == self.selected).then_some(time);
        Some(object.transform.model_matrix(spin_time))
    }

    /// Submit the whole scene to `renderer`
    pub fn render(&self, renderer: &mut dyn Renderer, camera: &Camera, aspect: f32, frame: &FrameInfo) {
        renderer.begin_frame(&camera.to_uniform(aspect));

        // Shading uses the first light only
        if let Some(light) = self.lights.first() {
            renderer.set_light(light);
        }

        for (index, object) in self.objects.iter().enumerate() {
            let spin_time = (index == self.selected).then_some(frame.time);
            let uniform = ModelUniform::new(object.transform.model_matrix(spin_time));
            renderer.draw_mesh(object.mesh(), &uniform);
        }

        for trajectory in self.objects.iter().filter_map(SceneObject::trajectory) {
            if !trajectory.curve().is_empty() {
                renderer.draw_curve(trajectory.curve().samples());
            }
        }
    }

    /// Axis the selected object is spinning around
    pub fn selected_spin(&self) -> RotationAxis {
        self.selected()
            .map(|object| object.transform.spin_axis())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformSnapshot;
    use glam::Vec3;

    fn two_objects() -> AppState {
        let objects = vec![
            SceneObject::new("a", MeshHandle(0), TransformSnapshot::default()),
            SceneObject::new("b", MeshHandle(1), TransformSnapshot::default()),
        ];
        AppState::new(objects, Vec::new(), DEFAULT_SPEED_SCALE)
    }

    #[test]
    fn test_first_object_selected_by_default() {
        let state = two_objects();
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.selected().unwrap().name(), "a");
    }

    #[test]
    fn test_commands_target_selection() {
        let mut state = two_objects();
        state.apply_all([Command::Select(1), Command::Translate(Vec3::X)]);
        assert_eq!(state.object(0).unwrap().transform.position(), Vec3::ZERO);
        assert_eq!(state.object(1).unwrap().transform.position(), Vec3::X);
    }

    #[test]
    fn test_quit() {
        let mut state = two_objects();
        assert!(!state.should_quit());
        state.apply(Command::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_empty_scene_ignores_commands() {
        let mut state = AppState::new(Vec::new(), Vec::new(), DEFAULT_SPEED_SCALE);
        state.apply_all([
            Command::Translate(Vec3::X),
            Command::ToggleTrajectory,
            Command::Reset,
            Command::Select(0),
        ]);
        assert!(state.selected().is_none());
        assert_eq!(state.selected_spin(), RotationAxis::None);
    }

    #[test]
    fn test_only_selected_object_spins() {
        let mut state = two_objects();
        state.apply(Command::ArmRotation(RotationAxis::Z));
        let time = 1.0;
        assert_ne!(state.model_matrix(0, time), Some(glam::Mat4::IDENTITY));
        assert_eq!(state.model_matrix(1, time), Some(glam::Mat4::IDENTITY));
        assert_eq!(state.model_matrix(2, time), None);
    }
}
