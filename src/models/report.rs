use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CheckFailure;

fn default_true() -> bool {
    true
}

/// # Validation Options
///
/// Per-request switches for the sanitization pipeline stages. Every check is
/// enabled by default, including when the field is omitted from a JSON body.
///
/// ## Fields
/// - `checkFormat`: apply the syntactic shape check
/// - `checkDisposable`: apply the disposable-domain denylist check
/// - `checkMx`: apply the live DNS MX verification
/// - `removeDuplicates`: collapse duplicate addresses before validation
///
/// ## Example JSON
/// ```json
/// { "checkFormat": true, "checkMx": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    #[serde(default = "default_true")]
    pub check_format: bool,
    #[serde(default = "default_true")]
    pub check_disposable: bool,
    #[serde(default = "default_true")]
    pub check_mx: bool,
    #[serde(default = "default_true")]
    pub remove_duplicates: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_format: true,
            check_disposable: true,
            check_mx: true,
            remove_duplicates: true,
        }
    }
}

/// Outcome for a single processed address.
///
/// `reason` is set exactly when the address is invalid, or when it is valid
/// but the MX check could not be completed — in that case the address still
/// counts as valid and the reason is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub email: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn valid(email: String) -> Self {
        Self {
            email,
            is_valid: true,
            reason: None,
        }
    }

    /// Valid, but the DNS path could not prove or disprove mail service.
    pub fn valid_with_caveat(email: String, reason: String) -> Self {
        Self {
            email,
            is_valid: true,
            reason: Some(reason),
        }
    }

    pub fn rejected(email: String, failure: CheckFailure) -> Self {
        Self {
            email,
            is_valid: false,
            reason: Some(failure.to_string()),
        }
    }
}

/// Aggregate counters for one sanitization run.
///
/// Invariants: `total` counts non-empty normalized addresses before
/// deduplication; `valid + invalid` equals the deduplicated count;
/// `duplicates` is `total - deduplicated` when deduplication ran, else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidationStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
}

/// # Sanitization Report
///
/// The partitioned result of one batch: every deduplicated address lands in
/// exactly one of `validEmails` or `invalidEmails`, none is dropped.
/// `warnings` repeats the valid-with-caveat entries (addresses whose MX check
/// was inconclusive) so callers can surface them; those addresses also appear
/// in `validEmails`.
///
/// ## Example JSON
/// ```json
/// {
///   "validEmails": ["a@b.com"],
///   "invalidEmails": [
///     { "email": "bad-email", "isValid": false, "reason": "Email address has invalid syntax" }
///   ],
///   "warnings": [],
///   "stats": { "total": 4, "valid": 1, "invalid": 2, "duplicates": 1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationReport {
    pub valid_emails: Vec<String>,
    pub invalid_emails: Vec<ValidationResult>,
    #[serde(default)]
    pub warnings: Vec<ValidationResult>,
    pub stats: ValidationStats,
}

impl SanitizationReport {
    pub fn empty() -> Self {
        Self {
            valid_emails: Vec::new(),
            invalid_emails: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_all_enabled() {
        let options: ValidationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ValidationOptions::default());
        assert!(options.check_format);
        assert!(options.check_disposable);
        assert!(options.check_mx);
        assert!(options.remove_duplicates);
    }

    #[test]
    fn options_accept_partial_bodies() {
        let options: ValidationOptions =
            serde_json::from_str(r#"{"checkMx": false, "removeDuplicates": false}"#).unwrap();
        assert!(options.check_format);
        assert!(!options.check_mx);
        assert!(!options.remove_duplicates);
    }

    #[test]
    fn rejected_result_carries_reason() {
        let result = ValidationResult::rejected("x".into(), CheckFailure::InvalidFormat);
        assert!(!result.is_valid);
        assert_eq!(result.reason.as_deref(), Some("Email address has invalid syntax"));
    }

    #[test]
    fn valid_result_serializes_without_reason() {
        let json = serde_json::to_string(&ValidationResult::valid("a@b.com".into())).unwrap();
        assert!(!json.contains("reason"));
        assert!(json.contains(r#""isValid":true"#));
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = SanitizationReport {
            valid_emails: vec!["a@b.com".into()],
            invalid_emails: vec![ValidationResult::rejected(
                "bad".into(),
                CheckFailure::InvalidFormat,
            )],
            warnings: Vec::new(),
            stats: ValidationStats {
                total: 2,
                valid: 1,
                invalid: 1,
                duplicates: 0,
            },
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: SanitizationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
