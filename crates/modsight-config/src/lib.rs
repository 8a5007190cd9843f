//! Shared configuration for the modsight diagnostics engine.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then an
//! optional TOML file (`--config-path`), then `MODSIGHT_*` environment
//! variables, then command-line flags. Every field has a default, so an empty
//! configuration source yields a usable [`Config`].

mod defaults;
mod indirect;
mod logging;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_TIDY_SOURCE, default_log_filter, default_log_format,
    default_tidy_source,
};
pub use indirect::IndirectCheck;
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for a diagnostics host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "MODSIGHT")]
#[serde(default)]
pub struct Config {
    /// Stage a disposable copy of the module file before semantic analysis.
    ///
    /// A presence flag can only switch this on, so it is read from the
    /// configuration file and `MODSIGHT_SHADOW_ENABLED` only.
    #[ortho_config(default = true, skip_cli)]
    pub shadow_enabled: bool,
    /// Directory under which shadow copies are created.
    ///
    /// `None` selects the system temporary directory.
    pub scratch_dir: Option<Utf8PathBuf>,
    /// Which indirect-marker mismatches are reported.
    #[ortho_config(default = IndirectCheck::Both)]
    pub indirect_check: IndirectCheck,
    /// Source tag attached to dependency-graph diagnostics.
    #[ortho_config(default = default_tidy_source())]
    pub tidy_source: String,
    /// `tracing` filter expression.
    #[ortho_config(default = default_log_filter().to_owned())]
    pub log_filter: String,
    /// Log output format.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shadow_enabled: true,
            scratch_dir: None,
            indirect_check: IndirectCheck::default(),
            tidy_source: default_tidy_source(),
            log_filter: default_log_filter().to_owned(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Returns true when shadow staging is enabled.
    #[must_use]
    pub const fn shadow_enabled(&self) -> bool {
        self.shadow_enabled
    }

    /// Directory under which shadow copies are created, if overridden.
    #[must_use]
    pub fn scratch_dir(&self) -> Option<&Utf8PathBuf> {
        self.scratch_dir.as_ref()
    }

    /// Indirect-marker reconciliation policy.
    #[must_use]
    pub const fn indirect_check(&self) -> IndirectCheck {
        self.indirect_check
    }

    /// Source tag for dependency-graph diagnostics.
    #[must_use]
    pub fn tidy_source(&self) -> &str {
        &self.tidy_source
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
