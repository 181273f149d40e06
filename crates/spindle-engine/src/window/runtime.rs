use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{
    ElementState, MouseButton as WinitMouseButton, Touch, TouchPhase as WinitTouchPhase,
    WindowEvent,
};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{PointerTracker, TouchPhase};
use crate::time::FrameClock;

/// When frames are drawn.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RedrawMode {
    /// Only after something requested a redraw (input, resize).
    #[default]
    WhenDirty,
    /// Every time the event loop goes idle.
    Continuous,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub redraw_mode: RedrawMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "spindle".to_string(),
            initial_size: LogicalSize::new(720.0, 720.0),
            redraw_mode: RedrawMode::WhenDirty,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until the window closes.
    ///
    /// Returns the first fatal error raised by a surface callback, if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    pointer: PointerTracker,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.request_exit(event_loop);
    }

    /// Creates the window + GPU surface and runs the created/changed callbacks.
    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            pointer: PointerTracker::new(),
            clock: FrameClock::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        let app = &mut self.app;
        entry.with_gpu(|gpu| -> Result<()> {
            log::debug!("surface created");
            app.on_surface_created(gpu)
                .context("surface creation callback failed")?;

            let size = gpu.size();
            log::debug!("surface changed to {}x{}", size.width, size.height);
            app.on_surface_changed(gpu, size.width, size.height);
            Ok(())
        })?;

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_surface(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Mobile platforms invalidate the native surface while suspended.
        if self.entry.take().is_some() {
            log::debug!("surface released on suspend");
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if self.config.redraw_mode == RedrawMode::Continuous {
            if let Some(entry) = &self.entry {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return;
        };

        if app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        // A scale factor change is followed by `Resized` with the final size.
        if let Some(new_size) = resized_to(&event) {
            surface_changed(app, entry, new_size);
            return;
        }

        let outcome = match &event {
            WindowEvent::CloseRequested => Ok(AppControl::Exit),

            WindowEvent::RedrawRequested => draw_frame(app, entry),

            WindowEvent::Focused(false) => {
                entry.with_pointer_mut(|p| p.focus_lost());
                Ok(AppControl::Continue)
            }

            _ => Ok(dispatch_pointer(app, entry, &event)),
        };

        match outcome {
            Ok(AppControl::Continue) => {}
            Ok(AppControl::Exit) => self.request_exit(event_loop),
            Err(e) => self.fail(event_loop, e),
        }
    }
}

/// Drawable size carried by a window event, if it resizes the surface.
fn resized_to(event: &WindowEvent) -> Option<PhysicalSize<u32>> {
    match event {
        WindowEvent::Resized(size) => Some(*size),
        _ => None,
    }
}

fn surface_changed<A: App>(app: &mut A, entry: &mut WindowEntry, new_size: PhysicalSize<u32>) {
    if !entry.with_gpu_mut(|gpu| gpu.resize(new_size)) {
        log::debug!("deferring zero-sized surface ({}x{})", new_size.width, new_size.height);
        return;
    }

    log::debug!("surface changed to {}x{}", new_size.width, new_size.height);
    entry.with(|fields| {
        app.on_surface_changed(fields.gpu, new_size.width, new_size.height);
        fields.window.request_redraw();
    });
}

fn draw_frame<A: App>(app: &mut A, entry: &mut WindowEntry) -> Result<AppControl> {
    entry.with_mut(|fields| {
        let size = fields.gpu.size();
        if size.width == 0 || size.height == 0 {
            // Minimized; the next usable resize requests a new frame.
            return Ok(AppControl::Continue);
        }

        let time = fields.clock.tick();
        let mut ctx = FrameCtx {
            window: WindowCtx::new(fields.window),
            gpu: fields.gpu,
            time,
        };

        app.on_draw_frame(&mut ctx)
            .with_context(|| format!("frame {} failed", time.frame_index))
    })
}

fn dispatch_pointer<A: App>(app: &mut A, entry: &mut WindowEntry, event: &WindowEvent) -> AppControl {
    entry.with_mut(|fields| {
        let pointer = fields.pointer;

        let touch = match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(pointer.cursor_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::CursorLeft { .. } => pointer.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: WinitMouseButton::Left,
                ..
            } => pointer.left_button(*state == ElementState::Pressed),
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => pointer.touch(
                *id,
                map_touch_phase(*phase),
                location.x as f32,
                location.y as f32,
            ),
            _ => None,
        };

        let Some(touch) = touch else {
            return AppControl::Continue;
        };

        let window = WindowCtx::new(fields.window);
        app.on_touch_event(touch, window.view_size(), &window)
    })
}

fn map_touch_phase(phase: WinitTouchPhase) -> TouchPhase {
    match phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}
