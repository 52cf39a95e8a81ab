use std::collections::VecDeque;

use glam::Vec3;

use crate::transform::RotationAxis;

/// Distance one translate command moves the selected object
pub const TRANSLATE_STEP: f32 = 0.1;
/// Fractional growth or shrink per scale command
pub const SCALE_STEP: f32 = 0.05;

/// Semantic user command, independent of the key that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Select the object at this index
    Select(usize),
    /// Move the selected object by this offset
    Translate(Vec3),
    /// Multiply the selected object's scale uniformly
    Scale(f32),
    /// Arm a spin axis on the selected object (`RotationAxis::None` disarms)
    ArmRotation(RotationAxis),
    /// Start or stop curve following on the selected object
    ToggleTrajectory,
    /// Restore the selected object's load-time transform
    Reset,
    Quit,
}

impl Command {
    pub fn grow() -> Self {
        Command::Scale(1.0 + SCALE_STEP)
    }

    pub fn shrink() -> Self {
        Command::Scale(1.0 - SCALE_STEP)
    }

    pub fn nudge(direction: Vec3) -> Self {
        Command::Translate(direction * TRANSLATE_STEP)
    }
}

/// Source of commands drained once per frame
pub trait CommandSource {
    /// Take every command queued since the last call, oldest first
    fn drain_commands(&mut self) -> Vec<Command>;
}

/// FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Lazily drain pending commands in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

impl CommandSource for CommandQueue {
    fn drain_commands(&mut self) -> Vec<Command> {
        self.drain().collect()
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

impl FromIterator<Command> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}
