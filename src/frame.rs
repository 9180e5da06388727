//! Frame Recording
//!
//! [`FrameRecorder`] wraps the command encoder for one frame. It opens at
//! most one render pass, exposes the binding and draw calls the core
//! supports, and seals into a [`SealedCommands`] that can be submitted
//! exactly once; reusing a sealed frame is a compile error because
//! submission consumes it.
//!
//! Vertex buffers are bound through [`crate::GpuBuffer`], so a buffer whose
//! staging window is still open is rejected at record time instead of
//! failing wgpu validation at submit.

use std::ops::{Range, RangeBounds};

use crate::errors::Result;
use crate::resources::buffer::GpuBuffer;

// ============================================================================
// Attachments
// ============================================================================

/// One color attachment of a render pass.
pub struct ColorAttachment<'a> {
    pub view: &'a wgpu::TextureView,
    pub resolve_target: Option<&'a wgpu::TextureView>,
    pub load: wgpu::LoadOp<wgpu::Color>,
    pub store: wgpu::StoreOp,
}

impl<'a> ColorAttachment<'a> {
    /// Attachment cleared to `color` and stored.
    #[must_use]
    pub fn clear(view: &'a wgpu::TextureView, color: wgpu::Color) -> Self {
        Self {
            view,
            resolve_target: None,
            load: wgpu::LoadOp::Clear(color),
            store: wgpu::StoreOp::Store,
        }
    }
}

/// Depth-stencil attachment of a render pass.
pub struct DepthAttachment<'a> {
    pub view: &'a wgpu::TextureView,
    pub depth_ops: Option<wgpu::Operations<f32>>,
    pub stencil_ops: Option<wgpu::Operations<u32>>,
}

// ============================================================================
// Recorder
// ============================================================================

/// Records the GPU commands of one frame.
pub struct FrameRecorder {
    encoder: wgpu::CommandEncoder,
}

impl FrameRecorder {
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some(label),
        });
        Self { encoder }
    }

    /// Begins a render pass over `colors` (and optionally a depth buffer).
    ///
    /// The returned [`PassEncoder`] borrows the recorder; drop it before
    /// calling [`finish`](Self::finish).
    pub fn begin_render_pass<'p>(
        &'p mut self,
        label: &str,
        colors: &[ColorAttachment<'_>],
        depth: Option<&DepthAttachment<'_>>,
    ) -> PassEncoder<'p> {
        let color_attachments: Vec<_> = colors
            .iter()
            .map(|attachment| {
                Some(wgpu::RenderPassColorAttachment {
                    view: attachment.view,
                    resolve_target: attachment.resolve_target,
                    ops: wgpu::Operations {
                        load: attachment.load,
                        store: attachment.store,
                    },
                    depth_slice: None,
                })
            })
            .collect();

        let depth_stencil_attachment =
            depth.map(|attachment| wgpu::RenderPassDepthStencilAttachment {
                view: attachment.view,
                depth_ops: attachment.depth_ops,
                stencil_ops: attachment.stencil_ops,
            });

        let pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &color_attachments,
            depth_stencil_attachment,
            ..Default::default()
        });

        PassEncoder { pass }
    }

    /// Seals the recording. The commands can be submitted exactly once.
    #[must_use]
    pub fn finish(self) -> SealedCommands {
        SealedCommands {
            buffer: self.encoder.finish(),
        }
    }
}

// ============================================================================
// Pass encoder
// ============================================================================

/// The open render pass of a frame.
pub struct PassEncoder<'p> {
    pass: wgpu::RenderPass<'p>,
}

impl PassEncoder<'_> {
    pub fn set_pipeline(&mut self, pipeline: &wgpu::RenderPipeline) {
        self.pass.set_pipeline(pipeline);
    }

    pub fn set_bind_group(&mut self, index: u32, bind_group: &wgpu::BindGroup, offsets: &[u32]) {
        self.pass.set_bind_group(index, bind_group, offsets);
    }

    /// Binds `bounds` of `buffer` to vertex buffer `slot`.
    ///
    /// Fails while the buffer's staging window is still open.
    pub fn set_vertex_buffer<S>(&mut self, slot: u32, buffer: &GpuBuffer, bounds: S) -> Result<()>
    where
        S: RangeBounds<wgpu::BufferAddress>,
    {
        let raw = buffer.raw_ready()?;
        self.pass.set_vertex_buffer(slot, raw.slice(bounds));
        Ok(())
    }

    /// Non-indexed draw over `vertices`, once per instance in `instances`.
    pub fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        self.pass.draw(vertices, instances);
    }
}

// ============================================================================
// Sealed commands
// ============================================================================

/// The sealed command buffer of one frame. Submission consumes it.
#[must_use = "sealed commands do nothing until submitted"]
pub struct SealedCommands {
    buffer: wgpu::CommandBuffer,
}

impl SealedCommands {
    pub fn submit(self, queue: &wgpu::Queue) {
        queue.submit(std::iter::once(self.buffer));
    }
}

// ============================================================================
// Drawable unit
// ============================================================================

/// The caller-assembled drawable unit consumed by the frame loop: one
/// pipeline, one bind group, one vertex buffer, one non-indexed draw.
pub struct DrawCall<'a> {
    pub pipeline: &'a wgpu::RenderPipeline,
    pub bind_group: &'a wgpu::BindGroup,
    pub vertex_buffer: &'a GpuBuffer,
    /// Vertex range passed to the draw.
    pub vertices: Range<u32>,
    /// Instance range passed to the draw.
    pub instances: Range<u32>,
}

/// A pending uniform refresh, applied after recording and before submission.
pub struct UniformUpdate<'a> {
    pub buffer: &'a GpuBuffer,
    pub payload: &'a [u8],
}
