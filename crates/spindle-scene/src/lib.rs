//! Spindle scene crate.
//!
//! GPU-free half of spindle: the per-frame transform pipeline, the shared
//! rotation angle, the touch-to-angle mapper and the static shape geometry.
//! The engine crate owns the window and the GPU; this crate only computes
//! what should be drawn and where.
//!
//! ```rust,ignore
//! let mut pipeline = TransformPipeline::new();
//! pipeline.set_viewport(ViewSize::new(320, 320));
//!
//! let scene = Scene::shapes();
//! for (drawable, mvp) in scene.frame_transforms(&pipeline, angle.get()) {
//!     // upload `mvp` for `drawable` and issue its draw call
//! }
//! ```

pub mod angle;
pub mod drawable;
pub mod error;
pub mod shape;
pub mod spin;
pub mod touch;
pub mod transform;
pub mod view;

pub use angle::SharedAngle;
pub use drawable::{Drawable, Scene};
pub use error::{check_gpu_error, ErrorQuery, GpuError, GpuFault, GpuFaultKind};
pub use shape::Shape;
pub use spin::auto_spin_angle;
pub use touch::{RequestRedraw, TouchAction, TouchEvent, TouchRotation, TOUCH_SCALE_FACTOR};
pub use transform::TransformPipeline;
pub use view::ViewSize;

/// Matrix type used throughout the transform pipeline (column-major).
pub type Mat4 = nalgebra::Matrix4<f32>;
