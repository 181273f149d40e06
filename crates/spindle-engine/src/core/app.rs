use anyhow::Result;
use spindle_scene::{RequestRedraw, TouchEvent, ViewSize};
use winit::event::WindowEvent;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Call order per GPU surface:
/// 1. `on_surface_created` exactly once, before anything is drawn
/// 2. `on_surface_changed` right after creation and on every usable resize
/// 3. `on_draw_frame` whenever a redraw was requested
///
/// A surface is recreated only after the platform suspended the app, in which
/// case the sequence starts over. An `Err` from any surface callback is fatal:
/// the runtime logs it and exits.
pub trait App {
    /// GPU surface exists; create long-lived GPU resources here.
    fn on_surface_created(&mut self, gpu: &Gpu<'_>) -> Result<()>;

    /// Drawable size changed (physical pixels, never zero).
    fn on_surface_changed(&mut self, gpu: &Gpu<'_>, width: u32, height: u32);

    /// Draws one frame.
    fn on_draw_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;

    /// Pointer input in view-local physical pixels.
    fn on_touch_event(
        &mut self,
        event: TouchEvent,
        view: ViewSize,
        redraw: &dyn RequestRedraw,
    ) -> AppControl {
        let _ = (event, view, redraw);
        AppControl::Continue
    }

    /// Raw window events, delivered before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }
}
