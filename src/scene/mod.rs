//! Hierarchical transforms and viewing.
//!
//! - [`MatrixStack`]: save/apply/restore model matrices while walking a hierarchy
//! - [`Camera`]: fixed look-at view and perspective frustum

pub mod camera;
pub mod matrix_stack;

pub use camera::Camera;
pub use matrix_stack::MatrixStack;
