use crate::config::args::{ExplorerArgs, StrategyArg};
use crate::controllers::interactive::data::interaction_limits::{
    InteractionLimits, InteractionLimitsError,
};
use crate::core::actions::render_frame::parallel_renderer::{
    RendererConfig, WorkerStrategy, default_worker_count,
};
use crate::core::data::complex::Complex;
use crate::core::data::surface_dimensions::{SurfaceDimensions, SurfaceDimensionsError};
use crate::core::data::view_parameters::{ViewParameters, ViewParametersError};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Surface(SurfaceDimensionsError),
    View(ViewParametersError),
    Limits(InteractionLimitsError),
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "invalid surface: {}", err),
            Self::View(err) => write!(f, "invalid view: {}", err),
            Self::Limits(err) => write!(f, "invalid interaction limits: {}", err),
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::View(err) => Some(err),
            Self::Limits(err) => Some(err),
            Self::ZeroWorkers => None,
        }
    }
}

impl From<SurfaceDimensionsError> for ConfigError {
    fn from(err: SurfaceDimensionsError) -> Self {
        Self::Surface(err)
    }
}

impl From<ViewParametersError> for ConfigError {
    fn from(err: ViewParametersError) -> Self {
        Self::View(err)
    }
}

impl From<InteractionLimitsError> for ConfigError {
    fn from(err: InteractionLimitsError) -> Self {
        Self::Limits(err)
    }
}

/// Everything needed to start the explorer, validated once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub surface: SurfaceDimensions,
    pub view: ViewParameters,
    pub renderer: RendererConfig,
    pub limits: InteractionLimits,
    pub frames: u32,
}

impl ExplorerConfig {
    pub fn from_args(args: &ExplorerArgs) -> Result<Self, ConfigError> {
        let surface = SurfaceDimensions::new(args.width, args.height)?;
        let view = ViewParameters::new(
            Complex {
                real: args.center_x,
                imag: args.center_y,
            },
            args.zoom,
            args.max_iterations,
        )?;

        let worker_count = match args.workers {
            Some(count) => NonZeroUsize::new(count).ok_or(ConfigError::ZeroWorkers)?,
            None => default_worker_count(),
        };
        let strategy = match args.strategy {
            StrategyArg::Scoped => WorkerStrategy::ScopedThreads,
            StrategyArg::Pool => WorkerStrategy::Pool,
        };

        let limits = InteractionLimits {
            zoom_settle: Duration::from_millis(args.zoom_settle_ms),
            ..InteractionLimits::default()
        };
        limits.validate()?;
        limits.check_zoom(view.zoom())?;

        Ok(Self {
            surface,
            view,
            renderer: RendererConfig {
                worker_count,
                strategy,
            },
            limits,
            frames: args.frames,
        })
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceDimensions::default(),
            view: ViewParameters::default(),
            renderer: RendererConfig::default(),
            limits: InteractionLimits::default(),
            frames: 10,
        }
    }
}
