use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use spindle_engine::core::{App, AppControl, FrameCtx};
use spindle_engine::device::Gpu;
use spindle_engine::render::shapes::ShapeRenderer;
use spindle_scene::{
    auto_spin_angle, Mat4, RequestRedraw, Scene, SharedAngle, TouchEvent, TouchRotation,
    TransformPipeline, ViewSize,
};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// The square + triangle scene, rotated by pointer drags or by the clock.
pub struct ShapesApp {
    scene: Scene,
    pipeline: TransformPipeline,
    angle: Arc<SharedAngle>,
    touch: TouchRotation,
    renderer: Option<ShapeRenderer>,
    auto_spin: bool,
}

impl ShapesApp {
    pub fn new(auto_spin: bool) -> Self {
        let angle = Arc::new(SharedAngle::new(0.0));
        Self {
            scene: Scene::shapes(),
            pipeline: TransformPipeline::new(),
            touch: TouchRotation::new(Arc::clone(&angle)),
            angle,
            renderer: None,
            auto_spin,
        }
    }

    /// Rotation shared with the input side; readable from any thread.
    pub fn angle(&self) -> &Arc<SharedAngle> {
        &self.angle
    }

    fn frame_angle(&self, elapsed: Duration) -> f32 {
        if self.auto_spin {
            auto_spin_angle(elapsed)
        } else {
            self.angle.get()
        }
    }

    fn frame_transforms(&self, angle: f32) -> Vec<Mat4> {
        self.scene
            .frame_transforms(&self.pipeline, angle)
            .map(|(_, mvp)| mvp)
            .collect()
    }
}

impl App for ShapesApp {
    fn on_surface_created(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let shapes = self.scene.drawables().iter().map(|d| &d.shape);
        self.renderer = Some(ShapeRenderer::new(gpu, shapes)?);
        Ok(())
    }

    fn on_surface_changed(&mut self, _gpu: &Gpu<'_>, width: u32, height: u32) {
        self.pipeline.set_viewport(ViewSize::new(width, height));
    }

    fn on_draw_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let renderer = self
            .renderer
            .as_ref()
            .context("draw requested before the surface was created")?;

        let angle = self.frame_angle(ctx.time.elapsed);
        let transforms = self.frame_transforms(angle);
        log::trace!("frame {} at {angle:.3} degrees", ctx.time.frame_index);

        ctx.render(CLEAR, |rctx, target| renderer.draw(rctx, target, &transforms))
    }

    fn on_touch_event(
        &mut self,
        event: TouchEvent,
        view: ViewSize,
        redraw: &dyn RequestRedraw,
    ) -> AppControl {
        self.touch.handle(event, view, redraw);
        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_scene::TouchAction;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountRedraws(Cell<u32>);

    impl RequestRedraw for CountRedraws {
        fn request_redraw(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn app_at(width: u32, height: u32, auto_spin: bool) -> ShapesApp {
        let mut app = ShapesApp::new(auto_spin);
        app.pipeline.set_viewport(ViewSize::new(width, height));
        app
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn drag_rotates_shared_angle() {
        let mut app = app_at(320, 320, false);
        let view = ViewSize::new(320, 320);
        let redraws = CountRedraws::default();

        app.on_touch_event(TouchEvent::new(TouchAction::Down, 0.0, 0.0), view, &redraws);
        app.on_touch_event(TouchEvent::new(TouchAction::Move, 10.0, 0.0), view, &redraws);

        assert!((app.angle().get() - 5.625).abs() < 1e-5);
        assert_eq!(redraws.0.get(), 1);
    }

    #[test]
    fn touch_angle_drives_frame_when_not_spinning() {
        let app = app_at(320, 320, false);
        app.angle().set(42.0);
        assert_eq!(app.frame_angle(Duration::from_secs(3)), 42.0);
    }

    // ── auto-spin ─────────────────────────────────────────────────────────

    #[test]
    fn clock_drives_frame_when_spinning() {
        let app = app_at(320, 320, true);
        app.angle().set(42.0);
        let angle = app.frame_angle(Duration::from_millis(1000));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn one_transform_per_shape_in_draw_order() {
        let app = app_at(320, 480, false);
        let transforms = app.frame_transforms(30.0);
        assert_eq!(transforms.len(), 2);

        let base = app.pipeline.base();
        for (drawable, mvp) in app.scene.drawables().iter().zip(&transforms) {
            assert_eq!(*mvp, base * drawable.model(30.0));
        }
    }

    #[test]
    fn surface_resize_updates_projection() {
        let mut app = app_at(320, 320, false);
        let square = app.pipeline.projection()[(0, 0)];

        app.pipeline.set_viewport(ViewSize::new(640, 320));
        assert!((app.pipeline.projection()[(0, 0)] - square / 2.0).abs() < 1e-6);
    }

    #[test]
    fn renderer_is_absent_until_surface_created() {
        assert!(ShapesApp::new(false).renderer.is_none());
    }
}
