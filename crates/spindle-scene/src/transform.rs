//! Projection / view / model composition.
//!
//! Matrices follow the OpenGL conventions: right-handed eye space, camera
//! looking down -Z of eye space, clip-space depth in `[-w, w]`. The engine
//! remaps depth to its own range in the vertex stage, so nothing here knows
//! about the GPU backend.

use nalgebra::{Point3, Unit, Vector3};

use crate::view::ViewSize;
use crate::Mat4;

/// Near clip plane distance.
pub const NEAR: f32 = 3.0;
/// Far clip plane distance.
pub const FAR: f32 = 7.0;
/// Vertical half-extent of the frustum at the near plane.
pub const VERTICAL_EXTENT: f32 = 1.0;

/// Camera position used for the view matrix.
pub const EYE: [f32; 3] = [0.0, 0.0, -3.0];
/// Point the camera looks at.
pub const TARGET: [f32; 3] = [0.0, 0.0, 0.0];
/// Camera up vector.
pub const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Perspective frustum matrix (`glFrustum` layout).
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    #[rustfmt::skip]
    let m = Mat4::new(
        2.0 * near / w, 0.0,            (right + left) / w, 0.0,
        0.0,            2.0 * near / h, (top + bottom) / h, 0.0,
        0.0,            0.0,            -(far + near) / d,  -2.0 * far * near / d,
        0.0,            0.0,            -1.0,               0.0,
    );
    m
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    Mat4::look_at_rh(
        &Point3::from(eye),
        &Point3::from(target),
        &Vector3::from(up),
    )
}

/// Rotation of `degrees` about `axis`.
///
/// The axis is normalized; a zero-length axis yields the identity.
pub fn rotation(degrees: f32, axis: Vector3<f32>) -> Mat4 {
    match Unit::try_new(axis, f32::EPSILON) {
        Some(axis) => Mat4::from_axis_angle(&axis, degrees.to_radians()),
        None => Mat4::identity(),
    }
}

/// Holds the per-surface projection and the fixed camera.
///
/// Projection is rebuilt on every viewport change; the view is computed once.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    projection: Mat4,
    view: Mat4,
    viewport: Option<ViewSize>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            projection: Mat4::identity(),
            view: look_at(EYE, TARGET, UP),
            viewport: None,
        }
    }

    /// Rebuilds the projection for a new surface size.
    ///
    /// A view with zero height has no aspect ratio; the previous projection is
    /// kept in that case.
    pub fn set_viewport(&mut self, size: ViewSize) {
        if size.height == 0 {
            log::debug!("ignoring viewport with zero height ({}x{})", size.width, size.height);
            return;
        }

        let ratio = size.aspect_ratio();
        self.projection = frustum(-ratio, ratio, -VERTICAL_EXTENT, VERTICAL_EXTENT, NEAR, FAR);
        self.viewport = Some(size);

        log::debug!("projection rebuilt for {}x{} (ratio {ratio})", size.width, size.height);
    }

    /// Last accepted viewport, if any.
    pub fn viewport(&self) -> Option<ViewSize> {
        self.viewport
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Projection × View. The projection must stay the left operand.
    pub fn base(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Base × model, with the model transform as the right operand.
    pub fn model_view_projection(&self, model: &Mat4) -> Mat4 {
        self.base() * model
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
