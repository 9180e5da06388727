//! Winit Application Framework
//!
//! A small application framework built on the
//! [winit](https://crates.io/crates/winit) cross-platform windowing library.
//! It owns the event loop, the window, and the [`Renderer`], and drives the
//! frame loop by requesting a redraw after every presented frame.
//!
//! # Overview
//!
//! - [`App`]: Builder for configuring and launching applications
//! - [`AppHandler`]: Trait that users implement to define application behavior
//! - [`FrameState`]: Per-frame timing passed to the handler
//! - [`FrameSubmission`]: What the handler wants drawn this frame
//!
//! # Usage
//!
//! 1. Implement [`AppHandler`] for your application struct
//! 2. Use [`App`] builder to configure window settings
//! 3. Call [`App::run`] to start the event loop
//!
//! # Example
//!
//! ```rust,ignore
//! use glint::app::{App, AppHandler, FrameState, FrameSubmission};
//! use glint::Renderer;
//! use std::sync::Arc;
//! use winit::window::Window;
//!
//! struct Demo {
//!     // Pipeline, buffers, and bind group created in `init`.
//! }
//!
//! impl AppHandler for Demo {
//!     fn init(renderer: &mut Renderer, window: &Arc<Window>) -> glint::Result<Self> {
//!         Ok(Demo { /* ... */ })
//!     }
//!
//!     fn frame(&mut self, frame: &FrameState) -> FrameSubmission<'_> {
//!         // Advance animation state, then describe the draw.
//!         todo!()
//!     }
//! }
//!
//! fn main() -> glint::Result<()> {
//!     App::new().with_title("Demo").run::<Demo>()
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::frame::{DrawCall, UniformUpdate};
use crate::renderer::Renderer;
use crate::settings::RenderSettings;

/// Per-frame timing information passed to [`AppHandler::frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Seconds since the first frame.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Number of frames handled before this one.
    pub frame_count: u64,
}

/// What the handler wants drawn this frame.
///
/// Borrows the handler's resources, so the handler stays the owner of its
/// pipeline, buffers, and bind group across frames.
pub struct FrameSubmission<'a> {
    /// The draw to record into the frame's render pass.
    pub draw: DrawCall<'a>,
    /// Uniform bytes to upload before the frame is submitted, if any.
    pub uniforms: Option<UniformUpdate<'a>>,
}

/// Trait for defining application behavior.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) - Called once when the window and renderer exist
/// 2. [`frame`](Self::frame) - Called once per redraw to describe the frame
pub trait AppHandler: Sized + 'static {
    /// Initializes the application.
    ///
    /// Called once after the window is created and the renderer is brought
    /// up. Use this to compile shaders, create buffers and textures, and
    /// build the pipeline and bind group.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the application before the first frame.
    fn init(renderer: &mut Renderer, window: &Arc<Window>) -> Result<Self>;

    /// Describes one frame.
    ///
    /// Called once per redraw. Advance animation state from `frame`, then
    /// return the draw call and any uniform refresh for this frame.
    fn frame(&mut self, frame: &FrameState) -> FrameSubmission<'_>;
}

/// Application builder for configuring and launching the frame loop.
///
/// # Example
///
/// ```rust,ignore
/// App::new()
///     .with_title("Pulse Triangle")
///     .with_size(800, 600)
///     .with_settings(RenderSettings {
///         vsync: true,
///         ..Default::default()
///     })
///     .run::<MyHandler>()?;
/// ```
pub struct App {
    title: String,
    width: u32,
    height: u32,
    render_settings: RenderSettings,
}

impl App {
    /// Creates a new application builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Glint".into(),
            width: 800,
            height: 600,
            render_settings: RenderSettings::default(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the render settings.
    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.render_settings = settings;
        self
    }

    /// Runs the application with the specified handler.
    ///
    /// Blocks until the window is closed or a fatal render error exits the
    /// event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if event loop creation or execution fails.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner =
            AppRunner::<H>::new(self.title, self.width, self.height, self.render_settings);
        event_loop.run_app(&mut runner)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal event loop handler.
///
/// Manages window creation, renderer bring-up, the frame clock, and the
/// redraw-driven render loop.
struct AppRunner<H: AppHandler> {
    title: String,
    width: u32,
    height: u32,
    render_settings: RenderSettings,

    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    handler: Option<H>,

    start_time: Instant,
    last_loop_time: Instant,
    frame_count: u64,
}

impl<H: AppHandler> AppRunner<H> {
    fn new(title: String, width: u32, height: u32, render_settings: RenderSettings) -> Self {
        let now = Instant::now();
        Self {
            title,
            width,
            height,
            render_settings,
            window: None,
            renderer: None,
            handler: None,
            start_time: now,
            last_loop_time: now,
            frame_count: 0,
        }
    }
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.width),
                f64::from(self.height),
            ));

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");
        let window = Arc::new(window);
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");

        let size = window.inner_size();
        let mut renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            &self.render_settings,
            size.width,
            size.height,
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Fatal renderer error: {e}");
                event_loop.exit();
                return;
            }
        };

        match H::init(&mut renderer, &window) {
            Ok(handler) => self.handler = Some(handler),
            Err(e) => {
                log::error!("Fatal init error: {e}");
                event_loop.exit();
                return;
            }
        }

        self.renderer = Some(renderer);

        let now = Instant::now();
        self.start_time = now;
        self.last_loop_time = now;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(renderer), Some(handler)) =
            (&self.window, &mut self.renderer, &mut self.handler)
        else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let frame = FrameState {
                    time: now.duration_since(self.start_time).as_secs_f32(),
                    dt: now.duration_since(self.last_loop_time).as_secs_f32(),
                    frame_count: self.frame_count,
                };
                self.last_loop_time = now;

                let submission = handler.frame(&frame);

                let size = window.inner_size();
                if let Err(e) = renderer.render_frame(
                    (size.width, size.height),
                    &submission.draw,
                    submission.uniforms.as_ref(),
                ) {
                    log::error!("Fatal render error: {e}");
                    event_loop.exit();
                    return;
                }

                self.frame_count += 1;
                window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.renderer.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }
}
