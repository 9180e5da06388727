//! Presentation Surface
//!
//! [`SurfaceManager`] owns the window surface and its configuration and
//! tracks them through an explicit state machine: `Unconfigured` until the
//! window first has area, `Configured` while the configured extent matches
//! the window, `Stale` while the configuration needs to be rebuilt after a
//! size change or a recoverable acquire failure. Every frame the driver
//! reconciles the polled window size with [`SurfaceManager::ensure_size`]
//! before acquiring, so acquisition never runs against an outdated extent
//! or a lost swapchain.
//!
//! Acquired frames come back as a [`FrameTarget`], which is single-use:
//! presenting consumes it, and [`FrameSequence`] bookkeeping additionally
//! rejects targets that are not the most recent acquisition.

use crate::errors::{GlintError, Result};

// ============================================================================
// Frame planning
// ============================================================================

/// Configuration state of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Never configured; the window has had no usable size yet.
    Unconfigured,
    /// Configured and matching the last reconciled window size.
    Configured,
    /// The configuration must be refreshed before the next acquisition,
    /// either because the window size changed or because an acquisition
    /// failed with a recoverable error.
    Stale,
}

/// What a frame iteration should do about the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePlan {
    /// Configured extent matches the window; acquire directly.
    Proceed,
    /// Reconfigure to the polled extent, then acquire.
    Reconfigure { width: u32, height: u32 },
    /// The window has no area (minimized); skip the frame entirely.
    Skip,
}

/// Decides the surface action for a polled window size.
///
/// `configured` is the extent of the current configuration; it is honored
/// only while `state` is [`SurfaceState::Configured`]. A stale or
/// unconfigured surface is rebuilt at any usable size, even one matching
/// the configured extent. A zero polled extent always skips; it never
/// disturbs an existing configuration.
#[must_use]
pub fn plan_frame(state: SurfaceState, configured: (u32, u32), polled: (u32, u32)) -> FramePlan {
    let (width, height) = polled;
    if width == 0 || height == 0 {
        return FramePlan::Skip;
    }
    if state == SurfaceState::Configured && configured == polled {
        FramePlan::Proceed
    } else {
        FramePlan::Reconfigure { width, height }
    }
}

// ============================================================================
// Frame sequence bookkeeping
// ============================================================================

/// Tracks which acquisition is outstanding so presents can be checked.
///
/// Dropping a [`FrameTarget`] without presenting is allowed; the next
/// acquisition simply supersedes it, and a late present of the superseded
/// target is rejected as stale.
#[derive(Debug, Default)]
pub struct FrameSequence {
    acquired: u64,
    outstanding: Option<u64>,
}

impl FrameSequence {
    /// Registers an acquisition and returns its frame index.
    pub fn begin_acquire(&mut self) -> u64 {
        let frame = self.acquired;
        self.acquired += 1;
        self.outstanding = Some(frame);
        frame
    }

    /// Validates that `frame` is the outstanding acquisition and clears it.
    pub fn finish_present(&mut self, frame: u64) -> Result<()> {
        match self.outstanding {
            Some(current) if current == frame => {
                self.outstanding = None;
                Ok(())
            }
            Some(current) => Err(GlintError::StalePresent {
                acquired: frame,
                current,
            }),
            None => Err(GlintError::StalePresent {
                acquired: frame,
                current: self.acquired,
            }),
        }
    }

    /// Total number of acquisitions so far.
    #[inline]
    #[must_use]
    pub fn acquired_count(&self) -> u64 {
        self.acquired
    }
}

// ============================================================================
// Frame target
// ============================================================================

/// The acquired surface texture for one frame.
///
/// Single-use by construction: presenting moves the target into
/// [`SurfaceManager::present`]. Hold it only for the duration of one frame.
pub struct FrameTarget {
    texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    frame: u64,
}

impl FrameTarget {
    /// View over the whole frame texture, for color attachments.
    #[inline]
    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Index assigned at acquisition.
    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame
    }
}

/// Classifies surface errors the frame loop can survive.
///
/// `Timeout`, `Outdated`, and `Lost` resolve once the next reconciliation
/// rebuilds the surface configuration; out-of-memory and driver-internal
/// failures do not.
#[must_use]
pub fn is_transient_acquire_error(error: &wgpu::SurfaceError) -> bool {
    matches!(
        error,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost
    )
}

// ============================================================================
// SurfaceManager
// ============================================================================

/// Owns the window surface, its configuration, and frame bookkeeping.
pub struct SurfaceManager {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    state: SurfaceState,
    frames: FrameSequence,
}

impl SurfaceManager {
    /// Wraps a created surface and its configuration.
    ///
    /// Configures immediately when the extent is non-zero; otherwise the
    /// surface stays [`SurfaceState::Unconfigured`] until the first
    /// reconciliation against a usable window size.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        surface: wgpu::Surface<'static>,
        config: wgpu::SurfaceConfiguration,
    ) -> Self {
        let mut manager = Self {
            surface,
            config,
            state: SurfaceState::Unconfigured,
            frames: FrameSequence::default(),
        };
        if manager.config.width > 0 && manager.config.height > 0 {
            manager.configure(device);
        }
        manager
    }

    fn configure(&mut self, device: &wgpu::Device) {
        self.surface.configure(device, &self.config);
        self.state = SurfaceState::Configured;
    }

    /// Reconciles the configured extent with the polled window size.
    ///
    /// Returns the plan that was applied: on `Reconfigure` the surface has
    /// already been reconfigured when this returns, on `Skip` nothing was
    /// touched.
    pub fn ensure_size(&mut self, device: &wgpu::Device, polled: (u32, u32)) -> FramePlan {
        let plan = plan_frame(self.state, (self.config.width, self.config.height), polled);
        if let FramePlan::Reconfigure { width, height } = plan {
            self.state = SurfaceState::Stale;
            self.config.width = width;
            self.config.height = height;
            self.configure(device);
            log::debug!("Surface reconfigured to {width}x{height}");
        }
        plan
    }

    /// Acquires the next frame target.
    pub fn acquire(&mut self) -> Result<FrameTarget> {
        if self.state == SurfaceState::Unconfigured {
            return Err(GlintError::SurfaceNotConfigured);
        }

        let texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(error) => {
                if is_transient_acquire_error(&error) {
                    // Retrying alone does not recover a lost swapchain; the
                    // next reconciliation rebuilds the configuration.
                    self.state = SurfaceState::Stale;
                }
                return Err(GlintError::AcquireFailed(error));
            }
        };
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let frame = self.frames.begin_acquire();

        Ok(FrameTarget {
            texture,
            view,
            frame,
        })
    }

    /// Presents a frame target acquired from this surface.
    ///
    /// Rejects targets from superseded acquisitions before wgpu is touched.
    pub fn present(&mut self, target: FrameTarget) -> Result<()> {
        self.frames.finish_present(target.frame)?;
        target.texture.present();
        Ok(())
    }

    /// The configured extent, or `None` while unconfigured.
    #[must_use]
    pub fn configured_size(&self) -> Option<(u32, u32)> {
        match self.state {
            SurfaceState::Unconfigured => None,
            SurfaceState::Configured | SurfaceState::Stale => {
                Some((self.config.width, self.config.height))
            }
        }
    }

    /// The surface color format.
    #[inline]
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current configuration state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Total number of acquisitions so far.
    #[inline]
    #[must_use]
    pub fn acquired_count(&self) -> u64 {
        self.frames.acquired_count()
    }
}
