use itertools::Itertools as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::{EnvFilter, Targets};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Debug output for our own crates and the HTTP trace layer, warnings for everything else.
/// `RUST_LOG` overrides both.
pub fn init_logging() {
    let crates = workspace_crates();
    let filter = EnvFilter::new(default_directive(&crates));

    let default_format = fmt::format().compact().without_time();
    let workspace_format = default_format.clone().with_source_location(true).with_target(false);

    tracing_subscriber::registry()
        .with(
            fmt::layer().event_format(default_format).with_filter(
                Targets::new()
                    .with_default(LevelFilter::TRACE)
                    .with_targets(crates.iter().map(|&c| (c, LevelFilter::OFF))),
            ),
        )
        .with(fmt::layer().event_format(workspace_format).with_filter(
            Targets::new().with_targets(crates.iter().map(|&c| (c, LevelFilter::TRACE))),
        ))
        .with(EnvFilter::try_from_default_env().unwrap_or(filter))
        .init();
}

fn default_directive(crates: &[&str]) -> String {
    // tower_http spans and response events are logged at debug
    let debug_targets = crates.iter().copied().chain(["tower_http"]);
    format!("warn,{}", debug_targets.map(|c| format!("{c}=debug")).join(","))
}

fn workspace_crates() -> Vec<&'static str> {
    // WORKSPACE_CRATES is generated in build.rs
    env!("WORKSPACE_CRATES")
        .split(',')
        .filter(|c| !c.is_empty())
        .chain([env!("CARGO_CRATE_NAME")])
        .unique()
        .collect()
}
