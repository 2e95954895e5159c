//! Command-line arguments and the validated startup configuration built from them.

pub mod args;
pub mod explorer_config;
pub mod logging;

pub use args::{ExplorerArgs, StrategyArg};
pub use explorer_config::{ConfigError, ExplorerConfig};
pub use logging::init_logging;
