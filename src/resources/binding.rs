//! Bind Group Layouts & Bind Groups
//!
//! The layout shape is kept as data: a [`BindingLayoutBlueprint`] lists the
//! slots (binding index, visibility, kind) a shader expects, and every bind
//! group built against it is structurally validated first. Arity, binding
//! indices, and kinds must all agree or construction fails with
//! [`GlintError::LayoutMismatch`] naming the offending slot, before any wgpu
//! call is issued.
//!
//! The binding kinds form a closed sum: uniform buffer, filtering sampler,
//! float-sampled 2D texture. Exactly one resource variant is active per
//! entry.

use crate::errors::{GlintError, Result};
use crate::resources::buffer::GpuBuffer;

// ============================================================================
// Binding kinds and layout slots
// ============================================================================

/// The closed set of binding kinds the core supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A uniform buffer binding.
    UniformBuffer,
    /// A filtering sampler.
    Sampler,
    /// A float-sampled, filterable 2D texture.
    Texture2d,
}

/// One slot of a bind group layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlot {
    /// Binding index referenced by the shader.
    pub binding: u32,
    /// Shader stages that may access the slot.
    pub visibility: wgpu::ShaderStages,
    /// What the slot binds.
    pub kind: BindingKind,
}

impl LayoutSlot {
    /// Uniform buffer slot.
    #[must_use]
    pub fn uniform(binding: u32, visibility: wgpu::ShaderStages) -> Self {
        Self {
            binding,
            visibility,
            kind: BindingKind::UniformBuffer,
        }
    }

    /// Filtering sampler slot.
    #[must_use]
    pub fn sampler(binding: u32, visibility: wgpu::ShaderStages) -> Self {
        Self {
            binding,
            visibility,
            kind: BindingKind::Sampler,
        }
    }

    /// Float-sampled 2D texture slot.
    #[must_use]
    pub fn texture_2d(binding: u32, visibility: wgpu::ShaderStages) -> Self {
        Self {
            binding,
            visibility,
            kind: BindingKind::Texture2d,
        }
    }

    fn binding_type(self) -> wgpu::BindingType {
        match self.kind {
            BindingKind::UniformBuffer => wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            BindingKind::Sampler => {
                wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)
            }
            BindingKind::Texture2d => wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
        }
    }
}

// ============================================================================
// Layout blueprint
// ============================================================================

/// The declared shape of a bind group layout.
///
/// Kept alongside the realized `wgpu::BindGroupLayout` so bind group
/// construction can be checked structurally instead of failing deep inside
/// wgpu validation.
#[derive(Debug, Clone)]
pub struct BindingLayoutBlueprint {
    label: String,
    slots: Vec<LayoutSlot>,
}

impl BindingLayoutBlueprint {
    #[must_use]
    pub fn new(label: &str, slots: Vec<LayoutSlot>) -> Self {
        Self {
            label: label.to_string(),
            slots,
        }
    }

    /// Declared slots in binding order.
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    /// Debug label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Maps the slots to wgpu layout entries.
    #[must_use]
    pub fn layout_entries(&self) -> Vec<wgpu::BindGroupLayoutEntry> {
        self.slots
            .iter()
            .map(|slot| wgpu::BindGroupLayoutEntry {
                binding: slot.binding,
                visibility: slot.visibility,
                ty: slot.binding_type(),
                count: None,
            })
            .collect()
    }

    /// Checks `entries` (binding index, kind) pairs against the blueprint.
    ///
    /// Entries must match the slots positionally: same count, same binding
    /// indices, same kinds. The first disagreement is reported.
    pub fn validate(&self, entries: &[(u32, BindingKind)]) -> Result<()> {
        if entries.len() != self.slots.len() {
            return Err(GlintError::LayoutMismatch(format!(
                "layout '{}' declares {} slots, got {} entries",
                self.label,
                self.slots.len(),
                entries.len()
            )));
        }

        for (slot, &(binding, kind)) in self.slots.iter().zip(entries) {
            if binding != slot.binding {
                return Err(GlintError::LayoutMismatch(format!(
                    "layout '{}': expected binding {}, got binding {binding}",
                    self.label, slot.binding
                )));
            }
            if kind != slot.kind {
                return Err(GlintError::LayoutMismatch(format!(
                    "layout '{}' binding {}: expected {:?}, got {kind:?}",
                    self.label, slot.binding, slot.kind
                )));
            }
        }

        Ok(())
    }

    /// Realizes the layout on `device`.
    #[must_use]
    pub fn create_layout(&self, device: &wgpu::Device) -> BindingLayout {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&self.label),
            entries: &self.layout_entries(),
        });

        BindingLayout {
            blueprint: self.clone(),
            layout,
        }
    }
}

// ============================================================================
// Realized layout and bind group construction
// ============================================================================

/// A realized bind group layout paired with its blueprint.
pub struct BindingLayout {
    blueprint: BindingLayoutBlueprint,
    layout: wgpu::BindGroupLayout,
}

/// A resource bound into one slot. Exactly one variant is active.
pub enum BoundResource<'a> {
    /// The whole of a uniform buffer.
    UniformBuffer(&'a GpuBuffer),
    /// A sampler.
    Sampler(&'a wgpu::Sampler),
    /// A 2D texture view.
    Texture2d(&'a wgpu::TextureView),
}

impl BoundResource<'_> {
    /// The kind this resource satisfies.
    #[must_use]
    pub fn kind(&self) -> BindingKind {
        match self {
            Self::UniformBuffer(_) => BindingKind::UniformBuffer,
            Self::Sampler(_) => BindingKind::Sampler,
            Self::Texture2d(_) => BindingKind::Texture2d,
        }
    }
}

/// One bind group entry: a binding index and the resource filling it.
pub struct BindEntry<'a> {
    pub binding: u32,
    pub resource: BoundResource<'a>,
}

impl<'a> BindEntry<'a> {
    #[must_use]
    pub fn new(binding: u32, resource: BoundResource<'a>) -> Self {
        Self { binding, resource }
    }
}

impl BindingLayout {
    /// The underlying wgpu layout, for pipeline-layout assembly.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// The blueprint this layout was realized from.
    #[inline]
    #[must_use]
    pub fn blueprint(&self) -> &BindingLayoutBlueprint {
        &self.blueprint
    }

    /// Builds a bind group after validating `entries` against the blueprint.
    ///
    /// Uniform buffers must be unmapped; a buffer with an open staging
    /// window is rejected here rather than at submit time.
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        label: Option<&str>,
        entries: &[BindEntry<'_>],
    ) -> Result<wgpu::BindGroup> {
        let kinds: Vec<(u32, BindingKind)> = entries
            .iter()
            .map(|entry| (entry.binding, entry.resource.kind()))
            .collect();
        self.blueprint.validate(&kinds)?;

        let mut wgpu_entries = Vec::with_capacity(entries.len());
        for entry in entries {
            let resource = match &entry.resource {
                BoundResource::UniformBuffer(buffer) => {
                    buffer.raw_ready()?.as_entire_binding()
                }
                BoundResource::Sampler(sampler) => wgpu::BindingResource::Sampler(sampler),
                BoundResource::Texture2d(view) => wgpu::BindingResource::TextureView(view),
            };
            wgpu_entries.push(wgpu::BindGroupEntry {
                binding: entry.binding,
                resource,
            });
        }

        Ok(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout: &self.layout,
            entries: &wgpu_entries,
        }))
    }
}
