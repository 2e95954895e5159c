use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "info";

fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Installs the global logger. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    builder(Env::default()).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn unset_filter_variable_falls_back_to_info() {
        let logger = builder(Env::new().filter("MANDELBROT_EXPLORER_UNSET_LOG_FILTER")).build();

        assert_eq!(logger.filter(), LevelFilter::Info);
    }
}
