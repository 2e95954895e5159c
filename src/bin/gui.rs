use clap::Parser;
use log::error;
use mandelbrot_explorer::{ExplorerArgs, ExplorerConfig, RunGuiCommand, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = ExplorerArgs::parse();
    let config = ExplorerConfig::from_args(&args).inspect_err(|err| {
        error!("Invalid configuration: {}", err);
    })?;

    RunGuiCommand::new(config).execute()
}
