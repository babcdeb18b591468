//! Window-backed wgpu device and swapchain for the viewer.

use std::fmt;

/// Why the viewer could not bring up its GPU surface.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not be turned into a surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the window surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused a device with default limits.
    DeviceRequest(wgpu::RequestDeviceError),
    /// The adapter reports no usable configuration for the window surface.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "cannot create window surface: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no adapter can present to the window: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "cannot open GPU device: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "window surface has no supported configuration")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Device, queue, and the window surface the scene is presented to.
pub struct RenderContext {
    /// Logical device that owns every scene resource.
    pub device: wgpu::Device,
    /// Queue used for uniform uploads and frame submission.
    pub queue: wgpu::Queue,
    /// Surface of the viewer window.
    pub surface: wgpu::Surface<'static>,
    /// Active surface configuration; `width`/`height` drive the projection
    /// aspect and the depth target size.
    pub config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Open a device able to present to `window` and configure its surface
    /// at `size` with vsync.
    ///
    /// # Errors
    ///
    /// Returns the [`RenderContextError`] for whichever step fails first.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;
        let info = adapter.get_info();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Swivel Device"),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let (width, height) = size;
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::Fifo;
        surface.configure(&device, &config);

        log::info!(
            "GPU ready: {} ({:?}), surface {:?} {width}x{height}",
            info.name,
            info.backend,
            config.format,
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Color format the scene pipeline must target.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Follow a window resize. A minimized window (zero extent) keeps the
    /// previous configuration.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("surface resized to {width}x{height}");
    }

    /// Next swapchain image to draw the scene into.
    ///
    /// # Errors
    ///
    /// Passes through [`wgpu::SurfaceError`]; the viewer reconfigures on
    /// `Lost`/`Outdated`.
    pub fn acquire_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Encoder for one scene frame.
    #[must_use]
    pub fn frame_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Frame Encoder"),
            })
    }

    /// Submit a recorded frame.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit([encoder.finish()]);
    }
}
