//! Tracing initialization and structured events for an update run.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset. Keeps stderr quiet on normal runs.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` with a stderr formatter.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing a finished update, logged as one structured event.
#[derive(Debug)]
pub struct UpdateTelemetry<'a> {
    pub env_file: &'a Path,
    pub key: &'a str,
    pub address: &'a str,
    pub chain: &'a str,
    pub recap_file: Option<&'a Path>,
    pub recap_status: Option<&'a str>,
}

/// Emit the update summary to `tracing`.
pub fn emit_update(telemetry: &UpdateTelemetry<'_>) {
    info!(
        target: "forge_env_sync::cli",
        env_file = %telemetry.env_file.display(),
        key = telemetry.key,
        address = telemetry.address,
        chain = telemetry.chain,
        recap_file = %telemetry.recap_file.map(|p| p.display().to_string()).unwrap_or_default(),
        recap_status = telemetry.recap_status.unwrap_or("skipped"),
        "Recorded token address"
    );
}
