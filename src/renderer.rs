//! Renderer
//!
//! [`Renderer`] composes the GPU context and the surface manager and turns a
//! caller-assembled [`DrawCall`] into presented frames. Each frame follows a
//! fixed order: reconcile the surface with the polled window size, acquire,
//! record one render pass, refresh the uniform buffer, submit, present.
//! Zero-size windows and transient surface errors skip the frame; both are
//! reported through [`FrameOutcome`] rather than an error.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::context::GpuContext;
use crate::errors::{GlintError, Result};
use crate::frame::{ColorAttachment, DrawCall, FrameRecorder, UniformUpdate};
use crate::settings::RenderSettings;
use crate::surface::{FramePlan, SurfaceManager, is_transient_acquire_error};

/// How a frame iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was recorded, submitted, and presented.
    Rendered,
    /// The window had no area; nothing was acquired or written.
    SkippedZeroSize,
    /// The surface refused the frame with a transient error; the
    /// configuration is marked stale and rebuilt by the next
    /// reconciliation.
    SkippedSurface,
}

/// Owns the GPU context and the presentation surface.
pub struct Renderer {
    /// Adapter, device, queue, and the uncaptured-error monitor.
    pub gpu: GpuContext,
    /// The window surface and its configuration state.
    pub surface: SurfaceManager,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// Brings up the full stack against `window`.
    ///
    /// Creates the instance, surface, adapter, and device, then configures
    /// the surface with its default configuration (preferred format,
    /// render-attachment usage) and the present mode implied by
    /// `settings.vsync`. A zero initial extent leaves the surface
    /// unconfigured until the window first has area.
    pub async fn new<W>(
        window: W,
        settings: &RenderSettings,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = GpuContext::create_instance(settings);
        let surface = instance
            .create_surface(window)
            .map_err(|e| GlintError::SurfaceCreateFailed(e.to_string()))?;

        let gpu = GpuContext::new(&instance, &surface, settings).await?;

        let mut config = surface
            .get_default_config(&gpu.adapter, width, height)
            .ok_or(GlintError::SurfaceConfigUnsupported)?;
        config.present_mode = settings.present_mode();

        let surface = SurfaceManager::new(&gpu.device, surface, config);
        log::info!(
            "Renderer initialized ({width}x{height}, {:?})",
            surface.format()
        );

        Ok(Self {
            gpu,
            surface,
            clear_color: settings.clear_color,
        })
    }

    /// Event-driven resize from the windowing system.
    ///
    /// Funnels into the same reconciliation as the per-frame size poll, so
    /// either route leaves the configured extent matching the window.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.ensure_size(&self.gpu.device, (width, height));
    }

    /// Produces one frame.
    ///
    /// `polled_size` is the window size read this iteration; the surface is
    /// reconciled against it before acquisition. `uniforms` lands after
    /// recording and before submission, so the GPU reads this frame's
    /// values.
    pub fn render_frame(
        &mut self,
        polled_size: (u32, u32),
        draw: &DrawCall<'_>,
        uniforms: Option<&UniformUpdate<'_>>,
    ) -> Result<FrameOutcome> {
        if self.surface.ensure_size(&self.gpu.device, polled_size) == FramePlan::Skip {
            return Ok(FrameOutcome::SkippedZeroSize);
        }

        let target = match self.surface.acquire() {
            Ok(target) => target,
            Err(GlintError::AcquireFailed(e)) if is_transient_acquire_error(&e) => {
                log::warn!("Could not acquire next surface texture: {e}");
                return Ok(FrameOutcome::SkippedSurface);
            }
            Err(e) => return Err(e),
        };

        let mut recorder = FrameRecorder::new(&self.gpu.device, "Command Encoder");
        {
            let mut pass = recorder.begin_render_pass(
                "Main Pass",
                &[ColorAttachment::clear(target.view(), self.clear_color)],
                None,
            );
            pass.set_pipeline(draw.pipeline);
            pass.set_bind_group(0, draw.bind_group, &[]);
            pass.set_vertex_buffer(0, draw.vertex_buffer, ..)?;
            pass.draw(draw.vertices.clone(), draw.instances.clone());
        }

        if let Some(update) = uniforms {
            update.buffer.queue_write(&self.gpu.queue, 0, update.payload)?;
        }

        recorder.finish().submit(&self.gpu.queue);
        self.surface.present(target)?;

        Ok(FrameOutcome::Rendered)
    }

    /// The clear color used for the frame's render pass.
    #[inline]
    #[must_use]
    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    /// Replaces the clear color.
    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }
}
