//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`GlintError`] covers all failure modes including:
//! - GPU initialization failures
//! - Structural validation errors (bind groups, vertex layouts)
//! - Per-frame surface and submission errors
//! - Image decoding errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, GlintError>`.
//!
//! ```rust,ignore
//! use glint::errors::{GlintError, Result};
//!
//! fn build_resources() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the glint rendering core.
///
/// This enum covers all possible error conditions that can occur
/// during setup and frame production. Each variant provides specific
/// context about what went wrong.
#[derive(Error, Debug)]
pub enum GlintError {
    // ========================================================================
    // GPU Initialization Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the presentation surface.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(String),

    /// The adapter reports no usable configuration for the surface.
    #[error("Surface is not supported by the selected adapter")]
    SurfaceConfigUnsupported,

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Structural Validation Errors
    // ========================================================================
    /// Bind group entries do not match the layout blueprint.
    #[error("Bind group layout mismatch: {0}")]
    LayoutMismatch(String),

    /// A vertex buffer blueprint is internally inconsistent.
    #[error("Invalid vertex layout: {0}")]
    InvalidVertexLayout(String),

    /// Texture upload data does not match the declared extent and stride.
    #[error("Texture upload mismatch: {0}")]
    TextureUploadMismatch(String),

    // ========================================================================
    // Frame Production Errors
    // ========================================================================
    /// The surface could not provide the next frame.
    #[error("Failed to acquire frame: {0}")]
    AcquireFailed(wgpu::SurfaceError),

    /// A frame was requested while the surface has no valid configuration.
    #[error("Surface is not configured; the window has had no usable size yet")]
    SurfaceNotConfigured,

    /// A frame target from an earlier acquisition was presented.
    #[error("Stale frame target: acquired frame {acquired}, current frame {current}")]
    StalePresent {
        /// Frame index the target was acquired under
        acquired: u64,
        /// Frame index currently outstanding, if any
        current: u64,
    },

    /// A buffer was used on the GPU while its staging map was still open.
    #[error("Buffer '{0}' is still mapped; call unmap() before GPU use")]
    BufferStillMapped(String),

    /// A mapped-range operation was issued on an unmapped buffer.
    #[error("Buffer '{0}' is not mapped")]
    BufferNotMapped(String),

    /// A buffer write does not fit inside the buffer.
    #[error("Buffer write out of bounds: {0}")]
    BufferWriteOutOfBounds(String),

    // ========================================================================
    // I/O & Image Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for GlintError {
    fn from(err: image::ImageError) -> Self {
        GlintError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, GlintError>`.
pub type Result<T> = std::result::Result<T, GlintError>;
