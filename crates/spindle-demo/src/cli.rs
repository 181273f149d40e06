use clap::Parser;
use spindle_engine::device::GpuInit;
use spindle_engine::logging::LoggingConfig;
use spindle_engine::window::{RedrawMode, RuntimeConfig};
use winit::dpi::LogicalSize;

/// Square and triangle, rotated by dragging across the window.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about)]
pub struct Cli {
    /// Window title.
    #[arg(long, default_value = "Hello Shapes")]
    pub title: String,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Log filter in `env_logger` syntax; falls back to RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,

    /// Spin the shapes on a clock instead of following the pointer.
    #[arg(long)]
    pub spin: bool,
}

impl Cli {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            redraw_mode: if self.spin {
                RedrawMode::Continuous
            } else {
                RedrawMode::WhenDirty
            },
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..LoggingConfig::default()
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        // Shape colors are plain RGB values, not linear light.
        GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        }
    }
}
