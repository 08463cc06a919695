//! A winit window with a wgpu surface configured for it.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::WindowConfig;
use crate::context::Context;
use crate::error::Result;

/// A native window and the GPU surface presenting into it.
pub struct WgpuCanvas {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    ctxt: Context,
}

impl WgpuCanvas {
    /// Opens a new window and initializes the wgpu context for it.
    pub fn open(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let ctxt = pollster::block_on(Context::for_surface(&instance, &surface))?;

        let size = window.inner_size();
        let present_mode = if config.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: ctxt.surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: ctxt.alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&ctxt.device, &surface_config);

        log::info!(
            "Opened window \"{}\" ({}x{} px, scale factor {}).",
            config.title,
            surface_config.width,
            surface_config.height,
            window.scale_factor()
        );

        Ok(WgpuCanvas {
            window,
            surface,
            surface_config,
            ctxt,
        })
    }

    /// The wgpu context owned by this canvas.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctxt
    }

    /// The identifier of the underlying window.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Asks the windowing system for a repaint.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Resizes the surface. Zero sizes (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        log::debug!("Resizing surface to {}x{}.", width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    /// Configures the surface again with its current settings.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.ctxt.device, &self.surface_config);
    }

    /// Gets the current surface texture for rendering.
    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// The size of the surface, in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// The size of the surface, in logical units.
    ///
    /// Shapes are laid out in logical units so that they keep their size on
    /// high-DPI screens.
    pub fn logical_size(&self) -> (f32, f32) {
        let scale = self.window.scale_factor() as f32;
        let (w, h) = self.size();
        (w as f32 / scale, h as f32 / scale)
    }
}
