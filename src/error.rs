//! Errors raised while bringing up the window and its GPU resources.
//!
//! Shapes and surfaces cannot fail; only the host loop can.

/// All errors that `shapedraw` can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The platform event loop could not be created or run.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The operating system refused to create the window.
    #[error("error creating window: {0}")]
    Os(#[from] winit::error::OsError),
    /// No wgpu surface could be created for the window.
    #[error("error creating surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    /// No adapter is able to present to the window.
    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    /// The adapter refused to create a device.
    #[error("error requesting device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    #[error("the window surface supports no texture format")]
    SurfaceUnsupported,
    /// The GPU ran out of memory while acquiring a frame.
    #[error("out of memory while acquiring a frame")]
    OutOfMemory,
}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
