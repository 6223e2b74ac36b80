/// Checks the syntactic shape of an email address.
///
/// The accepted shape is a single-pass equivalent of the common HTML5 email
/// pattern: a local part of letters, digits and
/// `. ! # $ % & ' * + / = ? ^ _ ` { | } ~ -`, one `@`, then one or more
/// dot-separated DNS labels. Each label is 1-63 characters, alphanumeric,
/// with hyphens allowed internally but never leading or trailing.
///
/// This is a syntactic filter only; it makes no claim about deliverability.
///
/// # Examples
/// ```
/// use list_sanitizer::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("bad-email"));
/// assert!(!is_valid_email("user@-example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let Some((local_part, domain_part)) = email.split_once('@') else {
        return false; // No @ found
    };

    is_valid_local_part(local_part) && is_valid_domain_part(domain_part)
}

/// Validates the local-part component: one or more allowed characters.
fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty() && local.chars().all(is_allowed_local_char)
}

fn is_allowed_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c)
}

/// Validates the domain part: one or more dot-separated DNS labels.
///
/// A second `@` in the address ends up here and fails the label check.
fn is_valid_domain_part(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_standard_emails() {
        assert!(is_valid_email("simple@example.com"));
        assert!(is_valid_email("very.common@example.com"));
        assert!(is_valid_email("x@example.com")); // Short local
        assert!(is_valid_email("a.b@example.com"));
        assert!(is_valid_email("a@b.com"));
    }

    #[test]
    fn valid_special_chars() {
        assert!(is_valid_email("!#$%&'*+-/=?^_`{}|~@example.com"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("first.last@example.com"));
    }

    #[test]
    fn valid_single_label_domain() {
        assert!(is_valid_email("user@localhost"));
        assert!(is_valid_email("user@intranet"));
    }

    #[test]
    fn valid_hyphenated_and_numeric_domains() {
        assert!(is_valid_email("user@my-host.example.com"));
        assert!(is_valid_email("user@123.example.com"));
        assert!(is_valid_email("user@example.co.uk"));
    }

    #[test]
    fn valid_edge_cases() {
        // Max label length (63 chars) is accepted
        let label = "b".repeat(63);
        assert!(is_valid_email(&format!("user@{}.com", label)));
    }

    #[test]
    fn invalid_missing_at() {
        assert!(!is_valid_email("missing.example.com"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("missing@"));
        assert!(!is_valid_email("@missing.com"));
        assert!(!is_valid_email("@"));
    }

    #[test]
    fn invalid_multiple_ats() {
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn invalid_domains() {
        assert!(!is_valid_email("user@-hyphenstart.com"));
        assert!(!is_valid_email("user@hyphenend-.com"));
        assert!(!is_valid_email("user@.leadingdot.com"));
        assert!(!is_valid_email("user@double..dot.com"));
        assert!(!is_valid_email("user@trailingdot.com."));
        assert!(!is_valid_email("user@_invalidchar.com"));
        assert!(!is_valid_email("user@exam ple.com"));
    }

    #[test]
    fn invalid_overlong_label() {
        let label = "b".repeat(64);
        assert!(!is_valid_email(&format!("user@{}.com", label)));
    }

    #[test]
    fn invalid_local_parts() {
        assert!(!is_valid_email("spaces unquoted@example.com"));
        assert!(!is_valid_email("\"quoted\"@example.com"));
        assert!(!is_valid_email("paren(thesis)@example.com"));
        assert!(!is_valid_email("non-ascii-é@example.com"));
    }

    #[test]
    fn lenient_local_part_dots() {
        // The local part is a character-class filter, not full RFC dot-atom:
        // consecutive or edge dots pass, as in the common HTML5 pattern.
        assert!(is_valid_email("double..dots@example.com"));
        assert!(is_valid_email(".leading@example.com"));
        assert!(is_valid_email("trailing.@example.com"));
    }

    #[test]
    fn invalid_special_cases() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("null@"));
    }
}
