//! The shape window: owns the scene and answers the windowing system's events.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use super::canvas::WgpuCanvas;
use super::frame_surface::FrameSurface;
use crate::color;
use crate::config::WindowConfig;
use crate::error::{Error, Result};
use crate::renderer::{PlanarBatch, PlanarRenderer};
use crate::scene::ShapeScene;

/// GPU state, which only exists while the window is open.
struct Gpu {
    canvas: WgpuCanvas,
    renderer: PlanarRenderer,
}

/// Structure representing a window with its scene of shapes.
///
/// The scene is populated when the window is created, painted on every
/// repaint request, and released when the window is closed.
pub struct ShapeWindow {
    config: WindowConfig,
    scene: ShapeScene,
    batch: PlanarBatch,
    gpu: Option<Gpu>,
    error: Option<Error>,
}

impl ShapeWindow {
    /// A window handler that will open a window described by `config`.
    pub fn new(config: WindowConfig) -> Self {
        ShapeWindow {
            config,
            scene: ShapeScene::new(),
            batch: PlanarBatch::new(),
            gpu: None,
            error: None,
        }
    }

    /// Consumes the handler, returning the error that stopped the event loop, if any.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let canvas = WgpuCanvas::open(event_loop, &self.config)?;
        let renderer = PlanarRenderer::new(canvas.context());
        self.scene.initialize();
        canvas.request_redraw();
        self.gpu = Some(Gpu { canvas, renderer });
        Ok(())
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.scene.teardown();
        self.gpu = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{}", error);
        self.error = Some(error);
        self.close(event_loop);
    }

    fn paint(&mut self) -> Result<()> {
        let Some(gpu) = self.gpu.as_mut() else {
            return Ok(());
        };

        let frame = match gpu.canvas.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring.");
                gpu.canvas.reconfigure();
                gpu.canvas.request_redraw();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(Error::OutOfMemory),
            Err(e) => {
                log::warn!("Failed to acquire surface texture: {}", e);
                return Ok(());
            }
        };
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut surface = FrameSurface::new(
            &mut self.batch,
            self.config.pen,
            self.config.ellipse_segments,
        );
        self.scene.paint(&mut surface);
        log::debug!(
            "Repainting {} shapes ({} vertices).",
            self.scene.len(),
            self.batch.vertices().len()
        );

        let ctxt = gpu.canvas.context();
        let mut encoder = ctxt.create_command_encoder(Some("shapedraw_frame_encoder"));

        // Clear the render target at the start of the frame
        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color::to_wgpu(self.config.background)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        let (w, h) = gpu.canvas.logical_size();
        gpu.renderer
            .render(ctxt, &mut encoder, &frame_view, w, h, &mut self.batch);

        ctxt.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl ApplicationHandler for ShapeWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        if let Err(e) = self.open(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if gpu.canvas.window_id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed.");
                self.close(event_loop);
            }
            WindowEvent::Resized(size) => {
                gpu.canvas.resize(size.width, size.height);
                gpu.canvas.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => gpu.canvas.request_redraw(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.paint() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }
}

/// Opens the shape window and blocks until it is closed.
pub fn run(config: WindowConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut window = ShapeWindow::new(config);
    event_loop.run_app(&mut window)?;
    window.into_result()
}
