//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code feeds raw pointer state into `PointerTracker`, which emits
//! `TouchEvent`s for the application.

mod pointer;

pub use pointer::{PointerTracker, TouchPhase};
