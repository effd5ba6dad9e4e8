//! Engine Core Module
//!
//! [`Engine`] owns everything needed to draw the robot but knows nothing about
//! windows. A frontend feeds it a surface, [`FrameState`]s and resize events.
//!
//! # Example
//!
//! ```rust,ignore
//! use dancebot::{Engine, RendererSettings};
//!
//! let mut engine = Engine::new(RendererSettings::default());
//! engine.init(window, 1280, 720).await?;
//!
//! loop {
//!     engine.update(&frame)?;
//!     engine.render()?;
//! }
//! ```

use std::time::Duration;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::animation::{Dance, DanceSettings, Pose};
use crate::errors::Result;
use crate::renderer::Renderer;
use crate::renderer::settings::RendererSettings;
use crate::robot::{DrawCommand, Rig};
use crate::scene::Camera;

/// The robot scene plus the renderer that draws it.
///
/// # Lifecycle
///
/// 1. Create with [`Engine::new`] or [`Engine::with_dance`]
/// 2. Initialize GPU with [`Engine::init`]
/// 3. Each frame call [`Engine::update`] then [`Engine::render`]
pub struct Engine {
    pub renderer: Renderer,
    pub camera: Camera,
    pub rig: Rig,
    pub dance: Dance,

    pose: Pose,
    draws: Vec<DrawCommand>,
    elapsed: Duration,
    frame_count: u64,
}

impl Engine {
    /// Creates an engine with the default dance settings.
    ///
    /// GPU resources are not allocated until [`init`](Self::init) is called.
    #[must_use]
    pub fn new(settings: RendererSettings) -> Self {
        Self::with_dance(settings, &DanceSettings::default())
    }

    #[must_use]
    pub fn with_dance(settings: RendererSettings, dance: &DanceSettings) -> Self {
        Self {
            renderer: Renderer::new(settings),
            camera: Camera::default(),
            rig: Rig::humanoid(),
            dance: Dance::new(dance),
            pose: Pose::rest(),
            draws: Vec::new(),
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Initializes GPU resources for `window` and fits the camera to it.
    ///
    /// # Errors
    ///
    /// Returns an error if no adapter is found, the device request fails or
    /// the surface cannot be configured.
    pub async fn init<W>(&mut self, window: W, width: u32, height: u32) -> Result<()>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        self.renderer.init(window, width, height).await?;
        self.camera.resize(width, height);
        Ok(())
    }

    /// Time since startup as of the last [`update`](Self::update).
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frame number of the last [`update`](Self::update).
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.renderer.size()
    }

    /// Pose computed by the last update.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Draw list computed by the last update.
    #[must_use]
    pub fn draws(&self) -> &[DrawCommand] {
        &self.draws
    }

    /// Resizes the surface and the camera frustum. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.renderer.resize(width, height);
        self.camera.resize(width, height);
    }

    /// Samples the dance at `frame.elapsed` and rebuilds the draw list.
    ///
    /// # Errors
    ///
    /// Fails only if the traversal leaves the matrix stack unbalanced.
    pub fn update(&mut self, frame: &FrameState) -> Result<()> {
        self.elapsed = frame.elapsed;
        self.frame_count = frame.frame_count;

        self.pose = self.dance.pose(frame.elapsed);
        self.draws = self.rig.draw_list(&self.pose)?;
        Ok(())
    }

    /// Draws the current draw list.
    ///
    /// # Errors
    ///
    /// Returns [`DanceError::NotInitialized`](crate::errors::DanceError::NotInitialized)
    /// before [`init`](Self::init).
    pub fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.camera, &self.draws)
    }

    /// Flips the dancing flag, returning the new state.
    pub fn toggle_dancing(&mut self) -> bool {
        self.dance.toggle()
    }

    /// Flips the torso spin, returning the new state.
    pub fn toggle_spin(&mut self) -> bool {
        self.dance.toggle_spin()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}

/// Per-frame timing information.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameState {
    /// Time since the application started. Kept exact so the dance clock
    /// does not drift on long runs.
    pub elapsed: Duration,
    /// Total number of frames rendered since startup.
    pub frame_count: u64,
}
