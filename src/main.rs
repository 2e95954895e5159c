use clap::Parser;
use log::{error, info};
use mandelbrot_explorer::{
    Colour, ExplorerArgs, ExplorerConfig, Framebuffer, ParallelRenderer, RenderQuality,
    init_logging,
};
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = ExplorerArgs::parse();
    let config = ExplorerConfig::from_args(&args).inspect_err(|err| {
        error!("Invalid configuration: {}", err);
    })?;

    let renderer = ParallelRenderer::new(config.renderer)?;
    let mut framebuffer = Framebuffer::new(config.surface);
    let mut total = Duration::ZERO;

    for frame in 1..=config.frames {
        let start = Instant::now();
        renderer.render_frame(&config.view, &mut framebuffer, RenderQuality::Full)?;
        let elapsed = start.elapsed();
        total += elapsed;

        info!("Frame {}/{} rendered in {:?}", frame, config.frames, elapsed);
    }

    if config.frames > 0 {
        info!("Average full-quality frame: {:?}", total / config.frames);

        let interior = Colour::BLACK.to_argb();
        let interior_pixels = framebuffer
            .cells()
            .iter()
            .filter(|&&cell| cell == interior)
            .count();
        info!(
            "Interior pixels: {} of {}",
            interior_pixels,
            framebuffer.cells().len()
        );
    }

    let start = Instant::now();
    renderer.render_frame(&config.view, &mut framebuffer, RenderQuality::Reduced)?;
    info!("Reduced-quality frame rendered in {:?}", start.elapsed());

    Ok(())
}
