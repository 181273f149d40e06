use nalgebra::Vector3;

use crate::shape::Shape;
use crate::transform::{rotation, TransformPipeline};
use crate::Mat4;

/// A shape plus the axis it spins about.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub shape: Shape,
    pub spin_axis: Vector3<f32>,
}

impl Drawable {
    /// Drawable spinning about the view axis (+Z).
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            spin_axis: Vector3::z(),
        }
    }

    pub fn with_spin_axis(mut self, axis: Vector3<f32>) -> Self {
        self.spin_axis = axis;
        self
    }

    /// Model transform for the given angle.
    pub fn model(&self, angle: f32) -> Mat4 {
        rotation(angle, self.spin_axis)
    }
}

/// Ordered collection of drawables, drawn in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Square then triangle, both spinning with the same angle.
    pub fn shapes() -> Self {
        let mut scene = Self::new();
        scene.push(Drawable::new(Shape::square()));
        scene.push(Drawable::new(Shape::triangle()));
        scene
    }

    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// One freshly computed MVP per drawable, in draw order.
    pub fn frame_transforms<'s>(
        &'s self,
        pipeline: &'s TransformPipeline,
        angle: f32,
    ) -> impl Iterator<Item = (&'s Drawable, Mat4)> + 's {
        let base = pipeline.base();
        self.drawables
            .iter()
            .map(move |d| (d, base * d.model(angle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewSize;

    fn pipeline() -> TransformPipeline {
        let mut p = TransformPipeline::new();
        p.set_viewport(ViewSize::new(320, 320));
        p
    }

    #[test]
    fn shapes_scene_draws_square_first() {
        let scene = Scene::shapes();
        let names: Vec<_> = scene.drawables().iter().map(|d| d.shape.name).collect();
        assert_eq!(names, ["square", "triangle"]);
    }

    #[test]
    fn one_transform_per_drawable() {
        let scene = Scene::shapes();
        let p = pipeline();
        assert_eq!(scene.frame_transforms(&p, 30.0).count(), scene.len());
    }

    #[test]
    fn transforms_match_pipeline_composition() {
        let scene = Scene::shapes();
        let p = pipeline();
        for (d, mvp) in scene.frame_transforms(&p, 30.0) {
            let expected = p.model_view_projection(&d.model(30.0));
            assert!((mvp - expected).amax() < 1e-6);
        }
    }

    #[test]
    fn default_shapes_rotate_together() {
        let scene = Scene::shapes();
        let p = pipeline();
        let mvps: Vec<Mat4> = scene.frame_transforms(&p, 45.0).map(|(_, m)| m).collect();
        assert_eq!(mvps[0], mvps[1]);
    }

    #[test]
    fn spin_axis_is_per_drawable() {
        let mut scene = Scene::new();
        scene.push(Drawable::new(Shape::square()));
        scene.push(Drawable::new(Shape::triangle()).with_spin_axis(Vector3::y()));

        let p = pipeline();
        let mvps: Vec<Mat4> = scene.frame_transforms(&p, 45.0).map(|(_, m)| m).collect();
        assert!((mvps[0] - mvps[1]).amax() > 1e-3);
    }

    #[test]
    fn zero_angle_yields_base() {
        let scene = Scene::shapes();
        let p = pipeline();
        for (_, mvp) in scene.frame_transforms(&p, 0.0) {
            assert!((mvp - p.base()).amax() < 1e-6);
        }
    }

    #[test]
    fn empty_scene_yields_nothing() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.frame_transforms(&pipeline(), 10.0).count(), 0);
    }
}
