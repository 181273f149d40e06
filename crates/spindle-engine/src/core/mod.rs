//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: three surface callbacks, pointer input, and the per-frame
//! context handed to the draw callback.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
