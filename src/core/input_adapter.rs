use glam::Vec3;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::command::{Command, CommandQueue, CommandSource};
use crate::camera::MovementState;
use crate::transform::RotationAxis;

/// Adapter that turns Winit events into semantic commands and camera input
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    commands: CommandQueue,
    /// Held camera keys
    movement: MovementState,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
}

impl WinitController {
    /// Create a new WinitController with nothing queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.process_key(event),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::CloseRequested => self.commands.push(Command::Quit),
            _ => {}
        }
    }

    fn process_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        if self.set_movement(keycode, pressed) {
            return;
        }
        if pressed {
            if let Some(command) = key_to_command(keycode, event.repeat) {
                self.commands.push(command);
            }
        }
    }

    /// Accumulate motion from the last known cursor position
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.mouse_position {
            self.mouse_delta.0 += x - old_x;
            self.mouse_delta.1 += y - old_y;
        }
        self.mouse_position = Some((x, y));
    }

    /// Forget the cursor so re-entering the window does not register as motion
    pub fn cursor_left(&mut self) {
        self.mouse_position = None;
    }

    /// Track a camera key; returns false if the key does not move the camera
    pub fn set_movement(&mut self, keycode: KeyCode, pressed: bool) -> bool {
        let slot = match keycode {
            KeyCode::KeyW => &mut self.movement.forward,
            KeyCode::KeyS => &mut self.movement.backward,
            KeyCode::KeyA => &mut self.movement.left,
            KeyCode::KeyD => &mut self.movement.right,
            KeyCode::Space => &mut self.movement.up,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => &mut self.movement.down,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Queue a command directly, bypassing key mapping
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn movement(&self) -> MovementState {
        self.movement
    }

    /// Reset per-frame state (mouse delta)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    /// Get accumulated mouse delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

impl CommandSource for WinitController {
    fn drain_commands(&mut self) -> Vec<Command> {
        self.commands.drain_commands()
    }
}

/// Map a pressed key to a command.
///
/// Transform keys fire on auto-repeat; one-shot keys (selection, axis arming,
/// toggles, reset, quit) ignore repeats.
pub fn key_to_command(keycode: KeyCode, repeat: bool) -> Option<Command> {
    let continuous = match keycode {
        KeyCode::ArrowUp => Some(Command::nudge(Vec3::NEG_Z)),
        KeyCode::ArrowDown => Some(Command::nudge(Vec3::Z)),
        KeyCode::ArrowLeft => Some(Command::nudge(Vec3::NEG_X)),
        KeyCode::ArrowRight => Some(Command::nudge(Vec3::X)),
        KeyCode::PageUp => Some(Command::nudge(Vec3::Y)),
        KeyCode::PageDown => Some(Command::nudge(Vec3::NEG_Y)),
        KeyCode::BracketLeft => Some(Command::shrink()),
        KeyCode::BracketRight => Some(Command::grow()),
        _ => None,
    };
    if continuous.is_some() {
        return continuous;
    }
    if repeat {
        return None;
    }

    match keycode {
        KeyCode::Digit1 => Some(Command::Select(0)),
        KeyCode::Digit2 => Some(Command::Select(1)),
        KeyCode::Digit3 => Some(Command::Select(2)),
        KeyCode::Digit4 => Some(Command::Select(3)),
        KeyCode::Digit5 => Some(Command::Select(4)),
        KeyCode::Digit6 => Some(Command::Select(5)),
        KeyCode::Digit7 => Some(Command::Select(6)),
        KeyCode::Digit8 => Some(Command::Select(7)),
        KeyCode::Digit9 => Some(Command::Select(8)),
        KeyCode::KeyX => Some(Command::ArmRotation(RotationAxis::X)),
        KeyCode::KeyY => Some(Command::ArmRotation(RotationAxis::Y)),
        KeyCode::KeyZ => Some(Command::ArmRotation(RotationAxis::Z)),
        KeyCode::KeyV => Some(Command::ToggleTrajectory),
        KeyCode::KeyP => Some(Command::Reset),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}
