//! Renderer Settings
//!
//! Global configuration consumed once by [`Renderer::init`](super::Renderer::init).
//!
//! ```rust,ignore
//! use dancebot::renderer::RendererSettings;
//!
//! let settings = RendererSettings {
//!     vsync: false,
//!     show_axes: true,
//!     ..Default::default()
//! };
//! ```

use crate::resources::Color;

/// Global configuration for renderer initialization.
///
/// | Field              | Description                              | Default            |
/// |--------------------|------------------------------------------|--------------------|
/// | `vsync`            | Vertical sync enabled                    | `true`             |
/// | `power_preference` | GPU adapter selection strategy           | `LowPower`         |
/// | `clear_color`      | Framebuffer clear color                  | Grey (0.2)         |
/// | `required_features`| Required wgpu features                   | Empty              |
/// | `required_limits`  | Required wgpu limits                     | Downlevel defaults |
/// | `depth_format`     | Depth buffer texture format              | `Depth32Float`     |
/// | `show_axes`        | Draw the coordinate-axis guide           | `false`            |
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Enable vertical synchronization (VSync).
    ///
    /// When `true`, the frame rate is capped to the display refresh rate.
    pub vsync: bool,

    /// GPU adapter selection preference.
    ///
    /// A handful of primitives do not need a discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Background clear color for the main render target.
    pub clear_color: wgpu::Color,

    /// Required wgpu features that must be supported by the adapter.
    pub required_features: wgpu::Features,

    /// Required wgpu limits.
    pub required_limits: wgpu::Limits,

    /// Depth buffer texture format.
    pub depth_format: wgpu::TextureFormat,

    /// Draw the X/Y/Z coordinate axes as points, for debugging placement.
    pub show_axes: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: wgpu::PowerPreference::LowPower,
            clear_color: Color::BACKGROUND.into(),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            depth_format: wgpu::TextureFormat::Depth32Float,
            show_axes: false,
        }
    }
}
