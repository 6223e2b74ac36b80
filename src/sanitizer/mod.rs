use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::time::Instant;
use tracing::info;

use crate::config::SanitizerConfig;
use crate::error::{CheckFailure, SanitizerError};
use crate::models::{SanitizationReport, ValidationOptions, ValidationResult, ValidationStats};
use crate::validation::disposable::{self, DisposableDomains};
use crate::validation::dnsmx::{self, MxCache, MxLookup, MxOutcome, RetryPolicy};
use crate::validation::syntax;

/// Lexical normalization of raw batch input.
pub mod normalize;

/// Order-preserving duplicate collapsing.
pub mod dedupe;

/// # Validation Orchestrator
///
/// Runs the sanitization pipeline over a batch of raw addresses: normalize,
/// deduplicate, then per surviving address the enabled checks in fixed order
/// (format, disposable domain, MX), short-circuiting on the first definitive
/// failure. MX lookups fan out concurrently through a bounded stream so a
/// large batch never turns into an unbounded burst against external
/// nameservers.
///
/// The DNS capability and the disposable denylist are injected, so the whole
/// pipeline runs deterministically under test.
pub struct EmailSanitizer {
    resolver: Arc<dyn MxLookup>,
    disposable: DisposableDomains,
    config: SanitizerConfig,
    retry: RetryPolicy,
}

impl EmailSanitizer {
    pub fn new(
        resolver: Arc<dyn MxLookup>,
        disposable: DisposableDomains,
        config: SanitizerConfig,
    ) -> Self {
        let retry = RetryPolicy {
            max_retries: config.dns_max_retries,
            backoff_base: config.dns_backoff_base,
        };
        Self {
            resolver,
            disposable,
            config,
            retry,
        }
    }

    /// Production wiring: system DNS resolver plus the built-in denylist.
    pub fn from_system_conf(config: SanitizerConfig) -> Result<Self, SanitizerError> {
        let resolver = dnsmx::system_resolver(config.dns_attempt_timeout)?;
        Ok(Self::new(
            Arc::new(resolver),
            DisposableDomains::builtin(),
            config,
        ))
    }

    /// Sanitize a batch of raw address chunks into a partitioned report.
    ///
    /// Returns only once every address is classified (or the batch deadline
    /// converted the stragglers to valid-with-caveat); the report is always
    /// complete, never partial. Output ordering follows the first-seen order
    /// of the input, so identical input yields an identical report.
    pub async fn sanitize(
        &self,
        raw: &[String],
        options: &ValidationOptions,
    ) -> SanitizationReport {
        let normalized = normalize::normalize_batch(raw);
        let total = normalized.len();
        let (unique, duplicates) = dedupe::dedupe(normalized, options.remove_duplicates);

        if unique.is_empty() {
            let mut report = SanitizationReport::empty();
            report.stats.total = total;
            report.stats.duplicates = duplicates;
            return report;
        }

        info!(
            total,
            unique = unique.len(),
            duplicates,
            "sanitizing address batch"
        );

        let deadline = self
            .config
            .batch_deadline
            .map(|budget| Instant::now() + budget);
        let cache = MxCache::default();

        let mut results: Vec<(usize, ValidationResult)> =
            stream::iter(unique.into_iter().enumerate())
                .map(|(index, email)| {
                    let cache = &cache;
                    async move {
                        (
                            index,
                            self.validate_address(email, options, deadline, cache).await,
                        )
                    }
                })
                .buffer_unordered(self.config.max_concurrent_lookups.max(1))
                .collect()
                .await;

        // Completion order is nondeterministic; reports are not.
        results.sort_by_key(|(index, _)| *index);

        let mut valid_emails = Vec::new();
        let mut invalid_emails = Vec::new();
        let mut warnings = Vec::new();
        for (_, result) in results {
            if result.is_valid {
                valid_emails.push(result.email.clone());
                if result.reason.is_some() {
                    warnings.push(result);
                }
            } else {
                invalid_emails.push(result);
            }
        }

        let stats = ValidationStats {
            total,
            valid: valid_emails.len(),
            invalid: invalid_emails.len(),
            duplicates,
        };

        SanitizationReport {
            valid_emails,
            invalid_emails,
            warnings,
            stats,
        }
    }

    /// Pipeline for one normalized address; stage order is fixed and each
    /// stage short-circuits on a definitive failure.
    async fn validate_address(
        &self,
        email: String,
        options: &ValidationOptions,
        deadline: Option<Instant>,
        cache: &MxCache,
    ) -> ValidationResult {
        if options.check_format && !syntax::is_valid_email(&email) {
            return ValidationResult::rejected(email, CheckFailure::InvalidFormat);
        }

        if options.check_disposable && self.disposable.is_disposable(&email) {
            return ValidationResult::rejected(email, CheckFailure::DisposableDomain);
        }

        if options.check_mx {
            match self.verify_mx(&email, deadline, cache).await {
                MxOutcome::Present => {}
                MxOutcome::Absent => {
                    return ValidationResult::rejected(email, CheckFailure::NoMxRecords);
                }
                MxOutcome::Unknown(detail) => {
                    return ValidationResult::valid_with_caveat(email, detail);
                }
            }
        }

        ValidationResult::valid(email)
    }

    async fn verify_mx(
        &self,
        email: &str,
        deadline: Option<Instant>,
        cache: &MxCache,
    ) -> MxOutcome {
        let Some(domain) = disposable::domain_of(email) else {
            // No usable domain means no mail exchanger to find.
            return MxOutcome::Absent;
        };

        if let Some(cached) = cache.get(domain).await {
            return cached;
        }

        let outcome = dnsmx::verify_domain_mx(
            self.resolver.as_ref(),
            domain,
            &self.retry,
            self.config.dns_attempt_timeout,
            deadline,
        )
        .await;
        cache.insert(domain, outcome.clone()).await;
        outcome
    }
}
