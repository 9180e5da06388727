//! Render Settings
//!
//! Global configuration consumed once during renderer initialization.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use glint::RenderSettings;
//!
//! // Default: vsync on, first available backend, deep-blue clear
//! let settings = RenderSettings::default();
//!
//! // Uncapped frame rate on a specific backend
//! let settings = RenderSettings {
//!     vsync: false,
//!     backends: Some(wgpu::Backends::VULKAN),
//!     ..Default::default()
//! };
//! ```

/// Global configuration for renderer initialization.
///
/// This struct is consumed once during [`Renderer::new`](crate::Renderer::new)
/// to set up the GPU context and configure the presentation surface.
///
/// # Fields
///
/// | Field               | Description                         | Default             |
/// |---------------------|-------------------------------------|---------------------|
/// | `vsync`             | Vertical sync enabled               | `true`              |
/// | `backends`          | Forced wgpu backend (or auto)       | `None`              |
/// | `power_preference`  | GPU adapter selection strategy      | `HighPerformance`   |
/// | `clear_color`       | Framebuffer clear color             | (0.0, 0.02, 0.1, 1) |
/// | `required_features` | Required wgpu features              | Empty               |
/// | `required_limits`   | Required wgpu limits                | 1 bind group        |
/// | `device_label`      | Debug label for the device          | `"Device"`          |
#[derive(Debug, Clone)]
pub struct RenderSettings {
    // === Presentation ===
    /// Enable vertical synchronization (VSync).
    ///
    /// When `true`, the frame rate is capped to the display refresh rate,
    /// reducing screen tearing and power consumption.
    /// When `false`, the frame rate is uncapped, which may cause tearing
    /// but reduces input latency.
    pub vsync: bool,

    /// Background clear color for the frame's render pass.
    pub clear_color: wgpu::Color,

    // === GPU / Backend Configuration ===
    /// Force a specific wgpu backend (Vulkan, Metal, DX12, …).
    ///
    /// `None` lets wgpu choose the best available backend for the platform.
    /// Override this only when debugging backend-specific issues.
    pub backends: Option<wgpu::Backends>,

    /// GPU adapter selection preference.
    ///
    /// - `HighPerformance`: Prefer discrete / dedicated GPU
    /// - `LowPower`: Prefer integrated GPU (better battery life)
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features that must be supported by the adapter.
    ///
    /// Device creation fails if these features are unavailable.
    pub required_features: wgpu::Features,

    /// Required wgpu limits (max buffer sizes, binding counts, etc.).
    ///
    /// The default asks for a single bind group on top of wgpu's defaults,
    /// which is all the core needs.
    pub required_limits: wgpu::Limits,

    /// Debug label attached to the created device.
    pub device_label: Option<&'static str>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.02,
                b: 0.1,
                a: 1.0,
            },
            backends: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits {
                max_bind_groups: 1,
                ..wgpu::Limits::default()
            },
            device_label: Some("Device"),
        }
    }
}

impl RenderSettings {
    /// Returns the present mode implied by the vsync toggle.
    #[inline]
    #[must_use]
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
