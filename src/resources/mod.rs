//! GPU Resource Factory
//!
//! Typed wrappers over wgpu resources with validation up front:
//! - Buffer: mapped-at-creation and queue-written buffers
//! - Texture: 2D textures with stride-checked uploads
//! - Sampler: sampler configuration
//! - Binding: bind group layouts and bind groups checked against a blueprint

pub mod binding;
pub mod buffer;
pub mod sampler;
pub mod texture;

// Re-export common types
pub use binding::{
    BindEntry, BindingKind, BindingLayout, BindingLayoutBlueprint, BoundResource, LayoutSlot,
};
pub use buffer::{GpuBuffer, MapState};
pub use sampler::SamplerConfig;
pub use texture::{GpuTexture, TextureDesc};
