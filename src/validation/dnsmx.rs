use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};
use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::system_conf::read_system_conf;

use crate::error::SanitizerError;

/// A single MX record target, sorted by ascending preference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxHost {
    pub preference: u16,
    pub exchange: String,
}

impl MxHost {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// DNS lookup failure, already classified at the resolver seam.
///
/// `NoRecords` is an authoritative negative answer (the domain or the MX
/// record type does not exist) and must never be retried. Everything else is
/// `Transient` and eligible for retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("no MX data for this domain")]
    NoRecords,
    #[error("transient DNS failure: {0}")]
    Transient(String),
}

/// The DNS resolution capability consumed by the pipeline.
///
/// Given a domain name, returns its MX targets or a classified error. The
/// production implementation wraps the system resolver; tests substitute
/// mocks so pipeline behavior is deterministic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MxLookup: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, DnsError>;
}

#[async_trait]
impl MxLookup for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, DnsError> {
        let lookup = TokioAsyncResolver::mx_lookup(self, domain)
            .await
            .map_err(|err| classify_resolve_error(&err))?;

        let mut hosts: Vec<MxHost> = lookup
            .iter()
            .map(|mx| MxHost::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect();
        hosts.sort();
        hosts.dedup();
        Ok(hosts)
    }
}

/// Build the production resolver from the system configuration.
///
/// Resolver-internal retries are disabled; the retry policy owns them.
/// An unreadable system configuration is the one systemic failure the
/// pipeline propagates as a hard error.
pub fn system_resolver(attempt_timeout: Duration) -> Result<TokioAsyncResolver, SanitizerError> {
    let (config, mut opts) =
        read_system_conf().map_err(|err| SanitizerError::resolver_init(err.into()))?;
    opts.timeout = attempt_timeout;
    opts.attempts = 1;
    Ok(TokioAsyncResolver::tokio(config, opts))
}

fn classify_resolve_error(err: &ResolveError) -> DnsError {
    match err.kind() {
        // Authoritative negatives: NXDOMAIN and NODATA both land here.
        ResolveErrorKind::NoRecordsFound { .. } => DnsError::NoRecords,
        _ => DnsError::Transient(err.to_string()),
    }
}

fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}

/// Bounded retry with linear backoff for transient DNS failures.
///
/// The delay after attempt `n` is `backoff_base × n`; linear rather than
/// exponential, since the caller is an interactive dashboard request.
/// Authoritative negatives bypass the policy entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_base: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    /// Total attempts: the first try plus every retry.
    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay to sleep after the given 1-based attempt fails.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_base * attempt
    }
}

/// Tri-state outcome of MX verification for one domain.
///
/// `Unknown` means the retry budget was exhausted by transient failures (or
/// the batch deadline fired first): the design treats network flakiness as
/// "cannot prove absence of mail service", so the address stays valid and
/// the detail string is surfaced as an informational caveat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxOutcome {
    Present,
    Absent,
    Unknown(String),
}

/// Verify that `domain` can plausibly receive mail.
///
/// Runs up to `policy.attempts()` lookups, each bounded by `attempt_timeout`
/// and by the remaining batch `deadline` when one is set. Never returns an
/// error: expected DNS outcomes map onto the tri-state result.
pub async fn verify_domain_mx(
    lookup: &dyn MxLookup,
    domain: &str,
    policy: &RetryPolicy,
    attempt_timeout: Duration,
    deadline: Option<Instant>,
) -> MxOutcome {
    let mut last_failure = String::from("no attempt completed");

    for attempt in 1..=policy.attempts() {
        let per_attempt = match remaining_budget(attempt_timeout, deadline) {
            Some(budget) => budget,
            None => {
                return MxOutcome::Unknown(
                    "batch deadline reached before MX verification completed".to_string(),
                );
            }
        };

        match tokio::time::timeout(per_attempt, lookup.lookup_mx(domain)).await {
            Ok(Ok(hosts)) => {
                return if hosts.is_empty() {
                    MxOutcome::Absent
                } else {
                    MxOutcome::Present
                };
            }
            Ok(Err(DnsError::NoRecords)) => {
                // Authoritative answer: no retry.
                debug!(domain, attempt, "domain has no MX records");
                return MxOutcome::Absent;
            }
            Ok(Err(DnsError::Transient(detail))) => {
                debug!(domain, attempt, %detail, "transient DNS failure");
                last_failure = detail;
            }
            Err(_) => {
                debug!(domain, attempt, "lookup attempt timed out");
                last_failure = format!("lookup timed out after {}ms", per_attempt.as_millis());
            }
        }

        if attempt < policy.attempts() {
            tokio::time::sleep(policy.delay_after(attempt)).await;
        }
    }

    warn!(
        domain,
        attempts = policy.attempts(),
        "MX verification inconclusive; treating domain as unverifiable"
    );
    MxOutcome::Unknown(format!(
        "MX check inconclusive after {} attempts: {}",
        policy.attempts(),
        last_failure
    ))
}

fn remaining_budget(attempt_timeout: Duration, deadline: Option<Instant>) -> Option<Duration> {
    match deadline {
        Some(deadline) => {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                None
            } else {
                Some(attempt_timeout.min(remaining))
            }
        }
        None => Some(attempt_timeout),
    }
}

/// Batch-scoped cache of per-domain MX outcomes.
///
/// Addresses in one batch frequently share domains; the cache keeps a batch
/// from resolving the same domain twice. Concurrent first lookups of one
/// domain may race and both resolve — the last write wins, which is harmless
/// for a read-mostly cache that lives for a single request.
#[derive(Debug, Default)]
pub struct MxCache {
    outcomes: Mutex<HashMap<String, MxOutcome>>,
}

impl MxCache {
    pub async fn get(&self, domain: &str) -> Option<MxOutcome> {
        self.outcomes.lock().await.get(domain).cloned()
    }

    pub async fn insert(&self, domain: &str, outcome: MxOutcome) {
        self.outcomes
            .lock()
            .await
            .insert(domain.to_string(), outcome);
    }
}
