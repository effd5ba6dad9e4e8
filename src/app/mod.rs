//! Application layer: platform-agnostic input plus the winit frontend.

pub mod input;
#[cfg(feature = "winit")]
pub mod winit;

pub use input::{Actions, ButtonState, Input, Key, MouseButton};
#[cfg(feature = "winit")]
pub use self::winit::App;
