//! Dancebot
//!
//! A hierarchical-transform robot that dances on a ten second loop, drawn
//! with `wgpu`.
//!
//! - [`scene`]: the matrix stack and the camera
//! - [`animation`]: joint angles as a function of time
//! - [`robot`]: the part tree and its traversal into draw commands
//! - [`resources`]: unit meshes and the colour palette
//! - [`renderer`]: GPU context, pipelines and the per-frame pass
//! - [`engine`] / [`app`]: the frame loop and the winit frontend

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod animation;
pub mod app;
pub mod engine;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod robot;
pub mod scene;
pub mod utils;

pub use animation::{Dance, DanceSettings, Joint, Pose};
#[cfg(feature = "winit")]
pub use app::App;
pub use engine::{Engine, FrameState};
pub use errors::{DanceError, Result};
pub use renderer::{Renderer, RendererSettings, WgpuContext};
pub use resources::{Color, MeshData, Shape, Vertex};
pub use robot::{DrawCommand, Rig};
pub use scene::{Camera, MatrixStack};
