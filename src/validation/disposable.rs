use std::collections::HashSet;

/// Known disposable/temporary-mail providers shipped with the service.
///
/// Exact-match lookups only; no wildcard or subdomain logic.
const BUILTIN_DISPOSABLE_DOMAINS: &[&str] = &[
    "0-00.usa.cc",
    "10minutemail.com",
    "20minutemail.com",
    "33mail.com",
    "anonbox.net",
    "burnermail.io",
    "deadaddress.com",
    "discard.email",
    "dispostable.com",
    "emailondeck.com",
    "fakeinbox.com",
    "getnada.com",
    "grr.la",
    "guerrillamail.biz",
    "guerrillamail.com",
    "guerrillamail.net",
    "guerrillamail.org",
    "inboxkitten.com",
    "mailcatch.com",
    "maildrop.cc",
    "mailexpire.com",
    "mailinator.com",
    "mailnesia.com",
    "mailsac.com",
    "mintemail.com",
    "moakt.com",
    "mohmal.com",
    "mytemp.email",
    "pokemail.net",
    "sharklasers.com",
    "spam4.me",
    "spambog.com",
    "spamgourmet.com",
    "temp-mail.org",
    "tempinbox.com",
    "tempmail.com",
    "tempr.email",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
];

/// Read-only denylist of disposable email domains.
///
/// The set is injectable so test suites can substitute fixture domains; the
/// service default is [`DisposableDomains::builtin`]. Lookups expect the
/// normalized (trimmed, lowercased) address used everywhere else in the
/// pipeline.
#[derive(Debug, Clone)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    /// The built-in denylist of known disposable providers.
    pub fn builtin() -> Self {
        Self::from_domains(BUILTIN_DISPOSABLE_DOMAINS.iter().copied())
    }

    /// A denylist from arbitrary domains (already lowercase or not).
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty denylist (every address passes the check).
    pub fn empty() -> Self {
        Self {
            domains: HashSet::new(),
        }
    }

    /// Whether the address's domain is on the denylist.
    ///
    /// Fails closed on malformed input: an address without exactly one `@`
    /// has no domain to look up and is treated as not disposable.
    pub fn is_disposable(&self, email: &str) -> bool {
        match domain_of(email) {
            Some(domain) => self.domains.contains(domain),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DisposableDomains {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The domain of an address containing exactly one `@`, or `None`.
pub fn domain_of(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(domain), None) => Some(domain),
        _ => None,
    }
}
