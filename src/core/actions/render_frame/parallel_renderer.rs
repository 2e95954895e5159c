use log::{info, trace};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use crate::core::actions::render_frame::render_frame_rayon_pool::render_frame_rayon_pool;
use crate::core::actions::render_frame::render_frame_scoped_threads::render_frame_scoped_threads;
use crate::core::data::framebuffer::{Framebuffer, FramebufferError};
use crate::core::data::render_quality::RenderQuality;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::RainbowColourMap;
use crate::core::util::partition_rows::partition_rows;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkerStrategy {
    /// Fresh scoped threads every frame.
    ScopedThreads,
    /// A rayon pool built once and reused for every frame.
    Pool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    pub worker_count: NonZeroUsize,
    pub strategy: WorkerStrategy,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            strategy: WorkerStrategy::ScopedThreads,
        }
    }
}

#[must_use]
pub fn default_worker_count() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

#[derive(Debug)]
pub enum RendererError {
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "failed to build render thread pool: {}", err),
        }
    }
}

impl Error for RendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for RendererError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

enum Execution {
    ScopedThreads,
    Pool(ThreadPool),
}

/// Renders whole frames with a fixed number of workers, one row band each.
pub struct ParallelRenderer {
    worker_count: NonZeroUsize,
    execution: Execution,
}

impl ParallelRenderer {
    pub fn new(config: RendererConfig) -> Result<Self, RendererError> {
        let execution = match config.strategy {
            WorkerStrategy::ScopedThreads => Execution::ScopedThreads,
            WorkerStrategy::Pool => Execution::Pool(
                ThreadPoolBuilder::new()
                    .num_threads(config.worker_count.get())
                    .thread_name(|index| format!("render-worker-{}", index))
                    .build()?,
            ),
        };

        info!(
            "Renderer ready: {} workers, {:?} strategy",
            config.worker_count, config.strategy
        );

        Ok(Self {
            worker_count: config.worker_count,
            execution,
        })
    }

    #[must_use]
    pub fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    #[must_use]
    pub fn strategy(&self) -> WorkerStrategy {
        match self.execution {
            Execution::ScopedThreads => WorkerStrategy::ScopedThreads,
            Execution::Pool(_) => WorkerStrategy::Pool,
        }
    }

    /// Clears the framebuffer and fills it from a snapshot of `view`. Blocks
    /// until every worker has finished its band.
    pub fn render_frame(
        &self,
        view: &ViewParameters,
        framebuffer: &mut Framebuffer,
        quality: RenderQuality,
    ) -> Result<(), FramebufferError> {
        framebuffer.clear();

        let snapshot = *view;
        let surface = framebuffer.surface();
        let tiles = partition_rows(surface, self.worker_count);
        let views = framebuffer.tile_views(&tiles)?;
        let algorithm = MandelbrotAlgorithm::new(snapshot, surface);
        let colour_map = RainbowColourMap::new(snapshot.max_iterations());

        trace!(
            "Rendering {}x{} in {} tiles at {:?} quality",
            surface.width(),
            surface.height(),
            tiles.len(),
            quality
        );

        match &self.execution {
            Execution::ScopedThreads => {
                render_frame_scoped_threads(views, &algorithm, &colour_map, quality)
            }
            Execution::Pool(pool) => {
                render_frame_rayon_pool(pool, views, &algorithm, &colour_map, quality)
            }
        }

        Ok(())
    }
}
