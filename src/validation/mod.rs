/// Syntactic shape check for email addresses.
///
/// A single-pass filter: local part of allowed characters, one `@`, then
/// dot-separated DNS labels. Purely lexical; makes no deliverability claim.
pub mod syntax;

/// Disposable-domain denylist.
///
/// An injectable, read-only set of known temporary-mail providers, matched
/// exactly against the domain of a normalized address.
pub mod disposable;

/// DNS MX verification.
///
/// Classified lookups through an injectable resolver seam, a bounded linear
/// retry policy for transient failures, and a tri-state outcome (present /
/// absent / unknown) so network flakiness never rejects an address.
pub mod dnsmx;
