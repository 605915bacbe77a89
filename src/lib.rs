pub mod commands;
pub mod config;
pub mod diagnosis;
pub mod scope;

use tracing_subscriber::EnvFilter;

pub use scope::{assess, is_out_of_domain, normalize, ScopeAssessment, ScopeError, ScopeVerdict};

/// Install the global tracing subscriber. Output goes to stderr so that
/// stdout stays reserved for command results.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        config::verbose_log_filter()
    } else {
        config::default_log_filter()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
