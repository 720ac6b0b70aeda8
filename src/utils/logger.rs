use crate::utils::env::env_is_on;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment switch equivalent to `--verbose`.
pub const DEBUG_ENV: &str = "MALICE_DEBUG";
/// Environment switch selecting JSON log lines.
pub const JSON_LOG_ENV: &str = "MALICE_LOG_JSON";

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose || env_is_on(DEBUG_ENV) {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("malice=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("malice=info"))
    }
}

pub fn init_cli_logger(verbose: bool) {
    if env_is_on(JSON_LOG_ENV) {
        init_json_logger(verbose);
        return;
    }

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
