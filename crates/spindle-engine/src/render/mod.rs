//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and records into
//! a `RenderTarget` handed out by the frame context.
//!
//! Convention:
//! - CPU geometry is in object space; per-draw MVP matrices come from
//!   `spindle_scene::TransformPipeline` in OpenGL clip conventions.
//! - Vertex shaders remap clip depth from `[-w, w]` to wgpu's `[0, w]`.

mod ctx;
mod shader;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{load_shader, ShaderProgram};
