//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`DanceError`] covers:
//! - GPU initialization failures
//! - Window and event loop failures
//! - Hierarchy traversal faults (unbalanced matrix stack)
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, DanceError>`.
//!
//! ```rust,ignore
//! use dancebot::errors::Result;
//!
//! fn build_frame() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the dancing robot.
#[derive(Error, Debug)]
pub enum DanceError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the presentation surface.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface cannot be presented by the chosen adapter.
    #[error("Surface not supported by adapter")]
    SurfaceUnsupported,

    /// A draw was issued before [`Renderer::init`](crate::renderer::Renderer::init).
    #[error("Renderer used before initialization")]
    NotInitialized,

    // ========================================================================
    // Window Errors
    // ========================================================================
    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// Window creation error (winit).
    #[cfg(feature = "winit")]
    #[error("Window creation error: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    // ========================================================================
    // Hierarchy Errors
    // ========================================================================
    /// `pop` was called with no saved matrix.
    #[error("Matrix stack underflow")]
    StackUnderflow,

    /// A traversal finished at a different depth than it started.
    #[error("Unbalanced matrix stack: started at depth {expected}, ended at {actual}")]
    UnbalancedStack {
        /// Depth before the traversal
        expected: usize,
        /// Depth after the traversal
        actual: usize,
    },
}

/// Alias for `Result<T, DanceError>`.
pub type Result<T> = std::result::Result<T, DanceError>;
