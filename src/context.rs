//! GPU Context
//!
//! The [`GpuContext`] holds the core GPU handles: adapter, device, and queue.
//! It installs the uncaptured-error monitor at device creation and answers
//! surface capability queries during presentation setup.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{GlintError, Result};
use crate::settings::RenderSettings;

// ============================================================================
// Error monitor
// ============================================================================

/// Receives uncaptured device errors.
///
/// wgpu reports validation failures, device loss, and out-of-memory
/// conditions through a device-level callback rather than through `Result`
/// values. The monitor logs each report and counts it; the count is
/// queryable so callers (and tests) can assert that a frame produced no
/// device errors. The callback may fire on any thread and must stay
/// side-effect-only, so the monitor is just an atomic counter behind an
/// `Arc` shared with the installed closure.
#[derive(Debug, Default)]
pub struct ErrorMonitor {
    errors: AtomicU64,
}

impl ErrorMonitor {
    fn record(&self, kind: &str, message: &str) {
        log::error!("Uncaptured device error ({kind}): {message}");
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of uncaptured device errors observed so far.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}

// ============================================================================
// GpuContext
// ============================================================================

/// Core wgpu context holding GPU handles.
///
/// This struct owns the fundamental wgpu resources needed for rendering:
/// - `adapter`: retained to answer surface capability queries
/// - `device`: GPU device for resource creation
/// - `queue`: Command submission queue
///
/// The uncaptured-error monitor installed on the device is owned here as
/// well, so it lives exactly as long as the device that reports into it.
pub struct GpuContext {
    /// The adapter the device was created from
    pub adapter: wgpu::Adapter,
    /// The wgpu device for GPU operations
    pub device: wgpu::Device,
    /// The command queue for submitting work
    pub queue: wgpu::Queue,

    monitor: Arc<ErrorMonitor>,
}

impl GpuContext {
    /// Creates the wgpu instance, honoring an optional backend restriction.
    #[must_use]
    pub fn create_instance(settings: &RenderSettings) -> wgpu::Instance {
        match settings.backends {
            Some(backends) => wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends,
                ..Default::default()
            }),
            None => wgpu::Instance::default(),
        }
    }

    /// Requests an adapter compatible with `surface` and creates the device
    /// and queue from it.
    ///
    /// The uncaptured-error monitor is installed before the context is
    /// returned, so no device error can slip past it.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
        settings: &RenderSettings,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GlintError::AdapterRequestFailed(e.to_string()))?;

        log::info!("Selected adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: settings.device_label,
                required_features: settings.required_features,
                required_limits: settings.required_limits.clone(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        let monitor = Arc::new(ErrorMonitor::default());
        let sink = Arc::clone(&monitor);
        device.on_uncaptured_error(Arc::new(move |error| match error {
            wgpu::Error::Validation { description, .. } => {
                sink.record("validation", &description);
            }
            wgpu::Error::OutOfMemory { .. } => {
                sink.record("out of memory", "allocation failed");
            }
            wgpu::Error::Internal { description, .. } => {
                sink.record("internal", &description);
            }
        }));

        Ok(Self {
            adapter,
            device,
            queue,
            monitor,
        })
    }

    /// Compiles a WGSL shader module from source text.
    ///
    /// The source is treated as opaque; compilation errors surface through
    /// the uncaptured-error monitor at pipeline creation.
    #[must_use]
    pub fn create_shader_module(&self, label: &str, source: &str) -> wgpu::ShaderModule {
        self.device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(source)),
            })
    }

    /// Returns the preferred color format for `surface`.
    ///
    /// The first reported capability format is the surface's preferred one.
    pub fn preferred_format(&self, surface: &wgpu::Surface<'_>) -> Result<wgpu::TextureFormat> {
        surface
            .get_capabilities(&self.adapter)
            .formats
            .first()
            .copied()
            .ok_or(GlintError::SurfaceConfigUnsupported)
    }

    /// Number of uncaptured device errors observed since creation.
    #[inline]
    #[must_use]
    pub fn error_count(&self) -> u64 {
        self.monitor.count()
    }

    /// Shared handle to the error monitor.
    #[inline]
    #[must_use]
    pub fn error_monitor(&self) -> Arc<ErrorMonitor> {
        Arc::clone(&self.monitor)
    }
}
