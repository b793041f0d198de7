//! Logging and crash reporting.
//!
//! ## Usage
//!
//! ```ignore
//! use bddgen::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(cli.verbose);
//! }
//! ```
//!
//! `BDDGEN_LOG` (or `RUST_LOG`) overrides the verbosity flag with a full
//! `EnvFilter` directive, e.g. `BDDGEN_LOG=bddgen::scenarios=trace`.

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_file, set_phase,
    set_progress, ContextGuard, GenerationContext, GenerationPhase,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "BDDGEN_LOG";

/// Default level for a `-v` count
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbosity)))
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(9), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0);
        init_tracing(3);
    }
}
