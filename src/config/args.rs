use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Spawn scoped threads for every frame
    Scoped,
    /// Reuse a rayon thread pool across frames
    Pool,
}

/// Interactive parallel Mandelbrot explorer
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct ExplorerArgs {
    /// Surface width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Render workers (defaults to the available parallelism)
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Scoped)]
    pub strategy: StrategyArg,

    /// Starting iteration budget
    #[arg(long, default_value_t = 100)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    pub center_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,

    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    /// Milliseconds the view keeps rendering at preview quality after the last wheel event
    #[arg(long, default_value_t = 120)]
    pub zoom_settle_ms: u64,

    /// Frames to render in headless mode
    #[arg(long, default_value_t = 10)]
    pub frames: u32,
}
