//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade. Backends other
//! than `env_logger` are not wired.

mod init;

pub use init::{init_logging, LoggingConfig};
