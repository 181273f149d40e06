//! Time subsystem.
//!
//! One `FrameClock` per window; call `tick()` once per drawn frame to obtain
//! `FrameTime`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
