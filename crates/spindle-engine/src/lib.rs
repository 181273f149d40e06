//! Spindle engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the demo builds on:
//! window loop, surface lifecycle, pointer input and shape rendering.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
