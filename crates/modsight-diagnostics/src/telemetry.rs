//! Log output for hosts that embed the diagnostics engine.
//!
//! The engine itself only emits `tracing` events. Hosts without their own
//! subscriber call [`initialise`] once at start-up to route those events to
//! stderr in the configured [`LogFormat`].

use std::io::{self, IsTerminal};

use modsight_config::{Config, LogFormat};
use once_cell::sync::OnceCell;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Proof that the process-wide subscriber is in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Reasons log output could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `log_filter` is not a valid `EnvFilter` directive list.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Some other subscriber already owns the global default.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Routes engine logs to stderr using `config`.
///
/// Only the first successful call has an effect; the configuration passed to
/// later calls is ignored.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter and
/// [`TelemetryError::Subscriber`] when a subscriber was installed elsewhere.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED.get_or_try_init(|| install_subscriber(config))?;
    Ok(TelemetryHandle)
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;
    let subscriber = tracing_subscriber::registry()
        .with(output_layer(config.log_format()))
        .with(filter);
    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

/// Formats events for stderr with UTC timestamps; colour only on a terminal.
fn output_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let stderr = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .with_timer(UtcTime::rfc_3339());
    match format {
        LogFormat::Json => stderr.json().flatten_event(true).boxed(),
        LogFormat::Compact => stderr.compact().boxed(),
    }
}
