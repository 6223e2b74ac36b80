/// Health status payload for the liveness endpoint.
pub mod health;

/// Request options and report types for the sanitization pipeline.
pub mod report;

pub use health::HealthResponse;
pub use report::{SanitizationReport, ValidationOptions, ValidationResult, ValidationStats};
