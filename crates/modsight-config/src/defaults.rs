/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Source tag attached to dependency-graph findings.
pub const DEFAULT_TIDY_SOURCE: &str = "go mod tidy";

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Json
}

/// Owned source tag used where allocation is required (e.g. serde).
#[must_use]
pub fn default_tidy_source() -> String {
    DEFAULT_TIDY_SOURCE.to_owned()
}
