#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod context;
pub mod resources;
pub mod pipeline;
pub mod surface;
pub mod frame;
pub mod renderer;
pub mod settings;
pub mod uniforms;
pub mod assets;
pub mod errors;
#[cfg(feature = "winit")]
pub mod app;

pub use context::{ErrorMonitor, GpuContext};
pub use resources::{
    BindEntry, BindingKind, BindingLayout, BindingLayoutBlueprint, BoundResource, GpuBuffer,
    GpuTexture, LayoutSlot, MapState, SamplerConfig, TextureDesc,
};
pub use pipeline::{ColorTarget, PipelineBuilder, VertexBufferBlueprint};
pub use surface::{FramePlan, FrameTarget, SurfaceManager, SurfaceState};
pub use frame::{
    ColorAttachment, DepthAttachment, DrawCall, FrameRecorder, PassEncoder, SealedCommands,
    UniformUpdate,
};
pub use renderer::{FrameOutcome, Renderer};
pub use settings::RenderSettings;
pub use uniforms::PulseUniforms;
pub use assets::PixelData;
pub use errors::{GlintError, Result};

#[cfg(feature = "winit")]
pub use app::{App, AppHandler, FrameState, FrameSubmission};
