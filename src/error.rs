use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

/// Per-address failure reasons produced by the validation pipeline.
///
/// These are data-quality outcomes, not errors: an address failing a check is
/// routed into the invalid partition of the report and the batch continues.
/// The `Display` strings are what callers see in `ValidationResult::reason`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckFailure {
    #[error("Email address has invalid syntax")]
    InvalidFormat,
    #[error("The email address domain is a provider of disposable email addresses")]
    DisposableDomain,
    #[error("Email domain has no mail exchanger records")]
    NoMxRecords,
}

impl CheckFailure {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::DisposableDomain => "DISPOSABLE_DOMAIN",
            Self::NoMxRecords => "NO_MX_RECORDS",
        }
    }
}

/// Systemic failures that abort a whole sanitization request.
///
/// Individual DNS lookups never surface here; only the resolution capability
/// itself being unusable (e.g. an unreadable system resolver configuration)
/// counts as systemic.
#[derive(Debug, Error)]
pub enum SanitizerError {
    #[error("DNS resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: ResolveError,
    },
}

impl SanitizerError {
    pub(crate) fn resolver_init(source: ResolveError) -> Self {
        Self::ResolverInit { source }
    }
}
