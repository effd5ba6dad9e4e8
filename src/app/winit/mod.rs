//! Winit-based Application Framework
//!
//! [`App`] configures the window and launches the event loop. The internal
//! `AppRunner` implements winit's [`ApplicationHandler`]: it creates the
//! window on `resumed`, feeds input into the engine and redraws continuously.
//!
//! # Example
//!
//! ```rust,ignore
//! use dancebot::app::winit::App;
//!
//! fn main() -> dancebot::errors::Result<()> {
//!     App::new().with_title("Dancing Robot").run()
//! }
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::animation::DanceSettings;
use crate::app::input::Input;
use crate::engine::{Engine, FrameState};
use crate::errors::{DanceError, Result};
use crate::renderer::settings::RendererSettings;
use crate::utils::{FpsCounter, Timer};

pub mod input_adapter;

/// Application builder.
///
/// ```rust,ignore
/// App::new()
///     .with_title("Dancing Robot")
///     .with_dance_settings(DanceSettings { start_dancing: true, ..Default::default() })
///     .run()?;
/// ```
pub struct App {
    title: String,
    size: (u32, u32),
    render_settings: RendererSettings,
    dance_settings: DanceSettings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Dancebot".into(),
            size: (1280, 720),
            render_settings: RendererSettings::default(),
            dance_settings: DanceSettings::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial inner size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width.max(1), height.max(1));
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RendererSettings) -> Self {
        self.render_settings = settings;
        self
    }

    #[must_use]
    pub fn with_dance_settings(mut self, settings: DanceSettings) -> Self {
        self.dance_settings = settings;
        self
    }

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns an error if event loop creation or execution fails, or if the
    /// GPU could not be initialized.
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self);
        event_loop.run_app(&mut runner)?;

        match runner.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

struct AppRunner {
    title: String,
    size: (u32, u32),
    engine: Engine,

    window: Option<Arc<Window>>,
    input: Input,
    timer: Timer,
    fps: FpsCounter,

    /// Initialization error that ended the loop.
    fatal: Option<DanceError>,
}

impl AppRunner {
    fn new(app: App) -> Self {
        Self {
            title: app.title,
            size: app.size,
            engine: Engine::with_dance(app.render_settings, &app.dance_settings),
            window: None,
            input: Input::new(),
            timer: Timer::new(),
            fps: FpsCounter::new(),
            fatal: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.size;
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(attributes)?);
        let PhysicalSize { width, height } = window.inner_size();

        log::info!("Initializing renderer for {width}x{height} window");
        pollster::block_on(self.engine.init(window.clone(), width, height))?;

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn apply_input(&mut self, event_loop: &ActiveEventLoop) {
        let actions = self.input.actions();
        if actions.exit {
            event_loop.exit();
            return;
        }
        if actions.toggle_dance {
            self.engine.toggle_dancing();
        }
        if actions.toggle_spin {
            self.engine.toggle_spin();
        }
        self.input.start_frame();
    }

    fn update_logic(&mut self) -> Result<()> {
        self.timer.tick();
        let frame = FrameState {
            elapsed: self.timer.elapsed,
            frame_count: self.timer.frame_count,
        };
        self.engine.update(&frame)
    }

    fn render_frame(&mut self) -> Result<()> {
        self.engine.render()?;
        if let Some(fps) = self.fps.update() {
            log::debug!("FPS: {fps:.1}");
        }
        Ok(())
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("Fatal renderer error: {e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        input_adapter::process_window_event(&mut self.input, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.apply_input(event_loop);
                if let Err(e) = self.update_logic().and_then(|()| self.render_frame()) {
                    log::error!("Frame failed: {e}");
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
