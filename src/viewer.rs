//! Standalone window backed by winit that draws the object and routes
//! mouse/keyboard input into an [`OrientationController`].
//!
//! ```no_run
//! # use swivel::Viewer;
//! Viewer::builder()
//!     .with_title("Table")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::{Projection, ProjectionMode, SceneUniform},
    error::SwivelError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor, KeyAction, MouseButton},
    options::Options,
    renderer::SceneRenderer,
    OrientationController,
};

/// Initial window size in logical pixels.
const DEFAULT_SIZE: (u32, u32) = (800, 600);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Swivel", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Swivel".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the object.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop. Alt + left drag rotates the object, alt + right
/// drag moves the camera along its forward axis, and the bound key toggles
/// orthographic projection.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`SwivelError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), SwivelError> {
        let event_loop =
            EventLoop::new().map_err(|e| SwivelError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            scene: None,
            controller: OrientationController::from_options(&self.options),
            input: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            projection: ProjectionMode::default(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SwivelError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU state created once the window exists.
struct Scene {
    context: RenderContext,
    renderer: SceneRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    controller: OrientationController,
    input: InputProcessor,
    projection: ProjectionMode,
    options: Options,
    title: String,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn handle_input(&mut self, event: InputEvent) {
        self.input.handle_event(event, &mut self.controller);
    }

    fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ToggleProjection => {
                self.projection = self.projection.toggled();
                log::info!("projection: {:?}", self.projection);
            }
            KeyAction::ResetView => {
                self.controller.reset();
                log::info!("view reset");
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn render(&mut self) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        let projection = Projection::new(
            self.projection,
            &self.options.camera,
            scene.context.config.width,
            scene.context.config.height,
        );
        let uniform = SceneUniform::new(
            self.controller.state(),
            &self.options,
            projection.build_matrix(),
        );

        match scene.renderer.render(&scene.context, &uniform) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    scene.context.resize(vp_w, vp_h);
                    scene.renderer.resize(&scene.context);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_SIZE.0,
                DEFAULT_SIZE.1,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            size,
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let renderer = SceneRenderer::new(&context);

        log::info!(
            "viewer started: alt+left drag rotates, alt+right drag zooms"
        );
        window.request_redraw();
        self.window = Some(window);
        self.scene = Some(Scene { context, renderer });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and GPU scene must be initialised.
        if self.window.is_none() || self.scene.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(scene) = &mut self.scene {
                    scene.context.resize(vp_w, vp_h);
                    scene.renderer.resize(&scene.context);
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.render(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                self.request_redraw();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.handle_input(InputEvent::ModifiersChanged {
                    alt: modifiers.state().alt_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if let Some(action) = self.input.handle_key_press(&key_str) {
                    self.apply_key_action(action);
                    self.request_redraw();
                }
            }

            _ => (),
        }
    }
}
