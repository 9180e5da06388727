//! Render Pipeline Assembly
//!
//! A [`VertexBufferBlueprint`] declares one vertex buffer's layout and is
//! validated before use: attributes sorted by offset, no overlap, everything
//! inside the stride. [`PipelineBuilder`] assembles a render pipeline from a
//! WGSL module, vertex blueprints, bind group layouts, and color targets,
//! with defaults matching a plain unlit draw (triangle list, no culling, no
//! blending, single sample).

use crate::errors::{GlintError, Result};
use crate::resources::binding::BindingLayout;

// ============================================================================
// Vertex buffer blueprint
// ============================================================================

/// The declared layout of one vertex buffer slot.
#[derive(Debug, Clone)]
pub struct VertexBufferBlueprint {
    /// Bytes between consecutive elements.
    pub array_stride: u64,
    /// Per-vertex or per-instance stepping.
    pub step_mode: wgpu::VertexStepMode,
    /// Attributes, sorted by byte offset.
    pub attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexBufferBlueprint {
    /// Per-vertex blueprint, validated.
    pub fn vertex(array_stride: u64, attributes: Vec<wgpu::VertexAttribute>) -> Result<Self> {
        let blueprint = Self {
            array_stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }

    /// Checks the blueprint invariants.
    ///
    /// Attributes must be non-empty, sorted by offset without overlap
    /// (`offset + format size` of one attribute never crosses into the
    /// next), fit within the stride, and use distinct shader locations.
    pub fn validate(&self) -> Result<()> {
        if self.attributes.is_empty() {
            return Err(GlintError::InvalidVertexLayout(
                "blueprint has no attributes".to_string(),
            ));
        }

        let mut cursor: u64 = 0;
        for attr in &self.attributes {
            if attr.offset < cursor {
                return Err(GlintError::InvalidVertexLayout(format!(
                    "attribute at location {} (offset {}) overlaps the previous attribute ending at {cursor}",
                    attr.shader_location, attr.offset
                )));
            }
            cursor = attr.offset + attr.format.size();
        }

        if cursor > self.array_stride {
            return Err(GlintError::InvalidVertexLayout(format!(
                "attributes end at byte {cursor} but the stride is {}",
                self.array_stride
            )));
        }

        for (i, attr) in self.attributes.iter().enumerate() {
            if self.attributes[..i]
                .iter()
                .any(|prev| prev.shader_location == attr.shader_location)
            {
                return Err(GlintError::InvalidVertexLayout(format!(
                    "shader location {} is used twice",
                    attr.shader_location
                )));
            }
        }

        Ok(())
    }

    /// Borrows the blueprint as a wgpu layout.
    #[must_use]
    pub fn as_wgpu(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.array_stride,
            step_mode: self.step_mode,
            attributes: &self.attributes,
        }
    }
}

// ============================================================================
// Color targets
// ============================================================================

/// One color target of the pipeline: format, blend, and write mask.
#[derive(Debug, Clone, Copy)]
pub struct ColorTarget {
    pub format: wgpu::TextureFormat,
    pub blend: Option<wgpu::BlendState>,
    pub write_mask: wgpu::ColorWrites,
}

impl ColorTarget {
    /// Opaque target: replace blending (src One, dst Zero, op Add on both
    /// channels) and all channels written.
    #[must_use]
    pub fn new(format: wgpu::TextureFormat) -> Self {
        Self {
            format,
            blend: Some(wgpu::BlendState::REPLACE),
            write_mask: wgpu::ColorWrites::ALL,
        }
    }

    fn as_wgpu(self) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format: self.format,
            blend: self.blend,
            write_mask: self.write_mask,
        }
    }
}

// ============================================================================
// Pipeline builder
// ============================================================================

/// Assembles a render pipeline.
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new("triangle", &shader)
///     .with_vertex_buffers(&[vertex_layout])
///     .with_bind_layout(&bindings)
///     .with_target(ColorTarget::new(surface_format))
///     .build(&gpu.device)?;
/// ```
pub struct PipelineBuilder<'a> {
    label: &'a str,
    shader: &'a wgpu::ShaderModule,
    vs_entry: &'a str,
    fs_entry: &'a str,
    vertex_buffers: &'a [VertexBufferBlueprint],
    bind_layouts: Vec<&'a wgpu::BindGroupLayout>,
    targets: Vec<ColorTarget>,
    primitive: wgpu::PrimitiveState,
    multisample: wgpu::MultisampleState,
    depth_stencil: Option<wgpu::DepthStencilState>,
}

impl<'a> PipelineBuilder<'a> {
    /// Starts a builder with `vs_main`/`fs_main` entry points and plain
    /// unlit-draw defaults.
    #[must_use]
    pub fn new(label: &'a str, shader: &'a wgpu::ShaderModule) -> Self {
        Self {
            label,
            shader,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            vertex_buffers: &[],
            bind_layouts: Vec::new(),
            targets: Vec::new(),
            primitive: wgpu::PrimitiveState::default(),
            multisample: wgpu::MultisampleState::default(),
            depth_stencil: None,
        }
    }

    /// Overrides the shader entry points.
    #[must_use]
    pub fn with_entry_points(mut self, vs: &'a str, fs: &'a str) -> Self {
        self.vs_entry = vs;
        self.fs_entry = fs;
        self
    }

    /// Vertex buffer slots, in slot order.
    #[must_use]
    pub fn with_vertex_buffers(mut self, buffers: &'a [VertexBufferBlueprint]) -> Self {
        self.vertex_buffers = buffers;
        self
    }

    /// Appends a bind group layout, in group index order.
    #[must_use]
    pub fn with_bind_layout(mut self, layout: &'a BindingLayout) -> Self {
        self.bind_layouts.push(layout.raw());
        self
    }

    /// Appends a color target.
    #[must_use]
    pub fn with_target(mut self, target: ColorTarget) -> Self {
        self.targets.push(target);
        self
    }

    /// Overrides the primitive state.
    #[must_use]
    pub fn with_primitive(mut self, primitive: wgpu::PrimitiveState) -> Self {
        self.primitive = primitive;
        self
    }

    /// Overrides the multisample state.
    #[must_use]
    pub fn with_multisample(mut self, multisample: wgpu::MultisampleState) -> Self {
        self.multisample = multisample;
        self
    }

    /// Adds a depth-stencil state.
    #[must_use]
    pub fn with_depth_stencil(mut self, depth_stencil: wgpu::DepthStencilState) -> Self {
        self.depth_stencil = Some(depth_stencil);
        self
    }

    /// Validates the vertex blueprints and creates the pipeline.
    pub fn build(self, device: &wgpu::Device) -> Result<wgpu::RenderPipeline> {
        for blueprint in self.vertex_buffers {
            blueprint.validate()?;
        }

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(self.label),
            bind_group_layouts: &self.bind_layouts,
            immediate_size: 0,
        });

        let vertex_layouts: Vec<_> = self.vertex_buffers.iter().map(|b| b.as_wgpu()).collect();
        let targets: Vec<_> = self
            .targets
            .iter()
            .map(|t| Some(t.as_wgpu()))
            .collect();

        Ok(device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: self.shader,
                entry_point: Some(self.vs_entry),
                buffers: &vertex_layouts,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: self.shader,
                entry_point: Some(self.fs_entry),
                targets: &targets,
                compilation_options: Default::default(),
            }),
            primitive: self.primitive,
            depth_stencil: self.depth_stencil,
            multisample: self.multisample,
            multiview_mask: None,
            cache: None,
        }))
    }
}
