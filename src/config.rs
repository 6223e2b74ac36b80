use std::env;
use std::time::Duration;

/// Centralized environment configuration for the sanitization pipeline.
///
/// Every knob has a default so the service runs without a `.env` file; values
/// are read once at startup. Durations are configured in milliseconds.
///
/// | Variable                  | Default | Meaning                               |
/// |---------------------------|---------|---------------------------------------|
/// | `MAX_CONCURRENT_LOOKUPS`  | 32      | In-flight MX resolutions per batch    |
/// | `DNS_ATTEMPT_TIMEOUT_MS`  | 2000    | Timeout for a single lookup attempt   |
/// | `DNS_MAX_RETRIES`         | 2       | Retries after a transient DNS failure |
/// | `DNS_BACKOFF_BASE_MS`     | 300     | Linear backoff step between attempts  |
/// | `BATCH_DEADLINE_MS`       | unset   | Overall deadline for one batch        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    pub max_concurrent_lookups: usize,
    pub dns_attempt_timeout: Duration,
    pub dns_max_retries: u32,
    pub dns_backoff_base: Duration,
    pub batch_deadline: Option<Duration>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 32,
            dns_attempt_timeout: Duration::from_millis(2000),
            dns_max_retries: 2,
            dns_backoff_base: Duration::from_millis(300),
            batch_deadline: None,
        }
    }
}

impl SanitizerConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_concurrent_lookups: parse_var("MAX_CONCURRENT_LOOKUPS")
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_concurrent_lookups),
            dns_attempt_timeout: parse_var("DNS_ATTEMPT_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.dns_attempt_timeout),
            dns_max_retries: parse_var("DNS_MAX_RETRIES").unwrap_or(defaults.dns_max_retries),
            dns_backoff_base: parse_var("DNS_BACKOFF_BASE_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.dns_backoff_base),
            batch_deadline: parse_var("BATCH_DEADLINE_MS").map(Duration::from_millis),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.parse().ok())
}
