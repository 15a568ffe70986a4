// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub const DEFAULT_DIRECTIVE: &str = "memviz=warn";

/// Sends diagnostics to stderr, keeping stdout for the report.
///
/// `RUST_LOG` replaces the default filter and `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() -> Result<(), ParseError> {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let registry = tracing_subscriber::registry().with(filter);
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }
    Ok(())
}

/// Filter from `RUST_LOG` directives, or the default when they are unset or blank.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(DEFAULT_DIRECTIVE),
    }
}
