#[cfg(test)]
mod pipeline_integration_tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::SanitizerConfig;
    use crate::export::valid_emails_csv;
    use crate::models::{SanitizationReport, ValidationOptions};
    use crate::sanitizer::EmailSanitizer;
    use crate::validation::disposable::DisposableDomains;
    use crate::validation::dnsmx::{MockMxLookup, MxHost};

    fn sanitizer() -> EmailSanitizer {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_lookup_mx()
            .returning(|_| Ok(vec![MxHost::new(10, "mx.test")]));

        EmailSanitizer::new(
            Arc::new(lookup),
            DisposableDomains::builtin(),
            SanitizerConfig {
                dns_backoff_base: Duration::ZERO,
                ..SanitizerConfig::default()
            },
        )
    }

    fn messy_batch() -> Vec<String> {
        vec![
            "A@B.com; a@b.com ,C@d.org\nbad-email".to_string(),
            "user@mailinator.com".to_string(),
            "  ".to_string(),
        ]
    }

    #[tokio::test]
    async fn report_partitions_without_overlap_or_loss() {
        let report = sanitizer()
            .sanitize(&messy_batch(), &ValidationOptions::default())
            .await;

        let valid: HashSet<&str> = report.valid_emails.iter().map(String::as_str).collect();
        let invalid: HashSet<&str> = report
            .invalid_emails
            .iter()
            .map(|r| r.email.as_str())
            .collect();

        assert!(valid.is_disjoint(&invalid));
        assert_eq!(
            valid.len() + invalid.len(),
            report.stats.valid + report.stats.invalid
        );
        assert_eq!(
            report.stats.valid + report.stats.invalid,
            report.stats.total - report.stats.duplicates
        );
    }

    #[tokio::test]
    async fn deduplicated_set_has_no_equal_entries() {
        let report = sanitizer()
            .sanitize(&messy_batch(), &ValidationOptions::default())
            .await;

        let mut seen = HashSet::new();
        for email in report
            .valid_emails
            .iter()
            .chain(report.invalid_emails.iter().map(|r| &r.email))
        {
            assert!(seen.insert(email.clone()), "duplicate in report: {}", email);
        }
    }

    #[tokio::test]
    async fn repeated_runs_produce_identical_reports() {
        let first = sanitizer()
            .sanitize(&messy_batch(), &ValidationOptions::default())
            .await;
        let second = sanitizer()
            .sanitize(&messy_batch(), &ValidationOptions::default())
            .await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn report_feeds_straight_into_csv_export() {
        let report = sanitizer()
            .sanitize(&messy_batch(), &ValidationOptions::default())
            .await;

        let csv = valid_emails_csv(&report.valid_emails).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("email"));
        assert_eq!(lines.count(), report.valid_emails.len());
    }

    #[test]
    fn report_json_uses_camel_case_field_names() {
        let report = SanitizationReport::empty();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("validEmails").is_some());
        assert!(json.get("invalidEmails").is_some());
        assert!(json.get("stats").is_some());
    }
}
