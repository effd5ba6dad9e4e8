//! CPU-side render data, independent of any GPU handle:
//! - [`MeshData`]/[`Vertex`]: interleaved geometry
//! - [`Shape`]: the shared primitive meshes
//! - [`Color`]: flat RGBA colors and the robot palette
//! - [`primitives`]: cube, sphere and axis generators

pub mod color;
pub mod mesh;
pub mod primitives;

pub use color::Color;
pub use mesh::{MeshData, Shape, Vertex};
