use crate::DomainError;

/// Suffix appended to octet-reversed IPv4 addresses for PTR lookups.
pub const REVERSE_SUFFIX: &str = "in-addr.arpa.";

/// Collapses every run of ASCII whitespace into a single space.
///
/// Runs are replaced, not removed: `"a  b"` becomes `"a b"` and `" a"` stays `" a"`.
pub fn clean_hostname(hostname: &str) -> String {
    let mut cleaned = String::with_capacity(hostname.len());
    let mut in_run = false;

    for c in hostname.chars() {
        if c.is_ascii_whitespace() {
            if !in_run {
                cleaned.push(' ');
                in_run = true;
            }
        } else {
            cleaned.push(c);
            in_run = false;
        }
    }

    cleaned
}

/// Builds the trailing-dot name `clean(hostname).domain.`
///
/// Casing is kept as given; lookups against these keys are case-sensitive.
pub fn fqdn(hostname: &str, domain: &str) -> String {
    format!("{}.{}.", clean_hostname(hostname), domain)
}

/// Derives the `in-addr.arpa.` name for a dotted-quad address.
///
/// Only the shape is checked: the input must split into exactly four parts.
pub fn reverse_name(ip: &str) -> Result<String, DomainError> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return Err(DomainError::InvalidAddress(ip.to_string()));
    }

    Ok(format!(
        "{}.{}.{}.{}.{}",
        parts[3], parts[2], parts[1], parts[0], REVERSE_SUFFIX
    ))
}
