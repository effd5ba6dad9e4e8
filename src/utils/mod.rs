//! Frame timing helpers.
//!
//! - [`Timer`]: elapsed time and frame count since startup
//! - [`FpsCounter`]: frames per second, refreshed once per second

pub mod fps_counter;
pub mod time;

pub use fps_counter::FpsCounter;
pub use time::Timer;
