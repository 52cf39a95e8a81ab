pub mod command;
pub mod frame;
pub mod input_adapter;
pub mod renderer;
pub mod timer;

pub use command::{Command, CommandQueue, CommandSource, SCALE_STEP, TRANSLATE_STEP};
pub use frame::{FixedStepFrames, FrameInfo, FrameIterator};
pub use input_adapter::{key_to_command, WinitController};
pub use renderer::{CameraUniform, LightUniform, LogRenderer, MeshHandle, ModelUniform, Renderer};
pub use timer::{FixedHz, FpsCounter};
