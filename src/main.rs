use std::sync::Arc;

use anyhow::{Context, Result};
use bezier_viewer::app::AppState;
use bezier_viewer::camera::Camera;
use bezier_viewer::cli::Cli;
use bezier_viewer::core::{
    Command, CommandSource, FixedStepFrames, FpsCounter, FrameIterator, LogRenderer,
    WinitController,
};
use bezier_viewer::scene::load_scene;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 700;
const HEADLESS_HZ: f32 = 60.0;
const HEADLESS_ASPECT: f32 = INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32;

struct Viewer {
    window: Option<Arc<Window>>,
    state: AppState,
    camera: Camera,
    controller: WinitController,
    renderer: LogRenderer,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl Viewer {
    fn new(state: AppState, camera: Camera) -> Self {
        Self {
            window: None,
            state,
            camera,
            controller: WinitController::new(),
            renderer: LogRenderer::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(1.0),
        }
    }

    fn aspect(&self) -> f32 {
        self.window
            .as_ref()
            .map(|w| w.inner_size())
            .filter(|size| size.height > 0)
            .map(|size| size.width as f32 / size.height as f32)
            .unwrap_or(HEADLESS_ASPECT)
    }

    /// One frame: drain input, update simulation, submit draws
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };

        self.state.apply_all(self.controller.drain_commands());
        if self.state.should_quit() {
            event_loop.exit();
            return;
        }

        self.camera.movement = self.controller.movement();
        let (dx, dy) = self.controller.mouse_delta();
        self.camera.look(dx, dy);
        self.controller.reset_deltas();
        self.camera.update();

        self.state.update(&frame);

        let aspect = self.aspect();
        self.state.render(&mut self.renderer, &self.camera, aspect, &frame);

        if let Some(fps) = self.fps.tick(frame.delta) {
            let selected = self.state.selected().map(|o| o.name()).unwrap_or("-");
            info!("FPS: {:.1}, selected: {}", fps, selected);
            if let Some(window) = &self.window {
                window.set_title(&format!("Bezier Viewer - {selected} ({fps:.0} fps)"));
            }
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Bezier Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::RedrawRequested => self.frame(event_loop),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Simulate `frame_count` frames at a fixed rate without a window
fn run_headless(mut state: AppState, camera: Camera, frame_count: u64) {
    let mut renderer = LogRenderer::new();

    // Nothing feeds input in headless mode, so start every curve moving
    for index in 0..state.objects().len() {
        if state.objects()[index].trajectory().is_some() {
            state.apply_all([Command::Select(index), Command::ToggleTrajectory]);
        }
    }
    state.apply(Command::Select(0));

    for frame in FixedStepFrames::at_hz(HEADLESS_HZ).take(frame_count as usize) {
        state.update(&frame);
        state.render(&mut renderer, &camera, HEADLESS_ASPECT, &frame);
    }

    for object in state.objects() {
        info!("'{}' ended at {:?}", object.name(), object.transform.position());
    }
    info!(
        "Headless run: {} frames, {} mesh draws, {} curve draws",
        renderer.frames(),
        renderer.mesh_draws(),
        renderer.curve_draws()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = load_scene(&cli.scene)
        .with_context(|| format!("Failed to load scene configuration {:?}", cli.scene))?;

    let state = AppState::from_scene(&scene, &cli.app_options());
    let camera = Camera::from_config(&scene.camera);

    if cli.headless {
        run_headless(state, camera, cli.frames);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut viewer = Viewer::new(state, camera);

    info!("Window draws nothing: frames go to the logging renderer (RUST_LOG=trace shows draw calls)");
    info!("Controls: 1-9 select, arrows/PgUp/PgDn move, [ ] scale, X/Y/Z spin, V trajectory, P reset, WASD camera, Esc quit");
    event_loop.run_app(&mut viewer)?;

    Ok(())
}
