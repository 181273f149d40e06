mod app;
mod cli;

use clap::Parser;
use spindle_engine::logging::init_logging;
use spindle_engine::window::Runtime;

use crate::app::ShapesApp;
use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    log::info!(
        "starting {}x{} window, {}",
        cli.width,
        cli.height,
        if cli.spin { "auto-spin" } else { "touch rotation" }
    );

    Runtime::run(cli.runtime_config(), cli.gpu_init(), ShapesApp::new(cli.spin))
}
