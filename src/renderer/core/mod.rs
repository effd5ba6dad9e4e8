//! Device, queue and surface ownership.

pub mod context;

pub use context::WgpuContext;
