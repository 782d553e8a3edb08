use super::names::fqdn;
use super::source::RecordSource;
use crate::DomainError;

/// DNS A record. Key is the owner FQDN, value the IPv4 address text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecord {
    hostname: String,
    domain: String,
    ip: String,
    source: RecordSource,
    fqdn: String,
}

impl ARecord {
    /// Validates and builds the record; the key is computed here, once.
    ///
    /// Both `hostname` and `ip` must be non-empty. The IP is kept as text and
    /// only checked for shape when its PTR is derived.
    ///
    /// ```
    /// use home_dns_domain::{ARecord, RecordSource, SourceTag};
    ///
    /// let source = RecordSource::new("config", SourceTag::Explicit);
    /// let record = ARecord::new("living  room", "home", "192.168.1.7", source).unwrap();
    /// assert_eq!(record.key(), "living room.home.");
    /// assert_eq!(record.value(), "192.168.1.7");
    /// ```
    pub fn new(
        hostname: impl Into<String>,
        domain: impl Into<String>,
        ip: impl Into<String>,
        source: RecordSource,
    ) -> Result<Self, DomainError> {
        let hostname = hostname.into();
        let domain = domain.into();
        let ip = ip.into();

        if hostname.is_empty() {
            return Err(DomainError::MissingField {
                record: "A",
                field: "hostname",
            });
        }
        if ip.is_empty() {
            return Err(DomainError::MissingField {
                record: "A",
                field: "IP",
            });
        }

        let fqdn = fqdn(&hostname, &domain);
        Ok(Self {
            hostname,
            domain,
            ip,
            source,
            fqdn,
        })
    }

    /// Owner name, e.g. `web.home.`
    pub fn key(&self) -> &str {
        &self.fqdn
    }

    /// IPv4 address text
    pub fn value(&self) -> &str {
        &self.ip
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }
}

/// DNS CNAME record. Key is the alias FQDN, value the target FQDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameRecord {
    alias_hostname: String,
    alias_domain: String,
    target_hostname: String,
    target_domain: String,
    source: RecordSource,
    alias_fqdn: String,
    target_fqdn: String,
}

impl CnameRecord {
    /// Validates alias and target hostnames; domains are taken as given, so
    /// callers fill defaults first (see `DomainBuilder`).
    pub fn new(
        alias_hostname: impl Into<String>,
        alias_domain: impl Into<String>,
        target_hostname: impl Into<String>,
        target_domain: impl Into<String>,
        source: RecordSource,
    ) -> Result<Self, DomainError> {
        let alias_hostname = alias_hostname.into();
        let alias_domain = alias_domain.into();
        let target_hostname = target_hostname.into();
        let target_domain = target_domain.into();

        if alias_hostname.is_empty() {
            return Err(DomainError::MissingField {
                record: "CNAME",
                field: "alias hostname",
            });
        }
        if target_hostname.is_empty() {
            return Err(DomainError::MissingField {
                record: "CNAME",
                field: "target hostname",
            });
        }

        let alias_fqdn = fqdn(&alias_hostname, &alias_domain);
        let target_fqdn = fqdn(&target_hostname, &target_domain);
        Ok(Self {
            alias_hostname,
            alias_domain,
            target_hostname,
            target_domain,
            source,
            alias_fqdn,
            target_fqdn,
        })
    }

    /// Alias name, e.g. `www.home.`
    pub fn key(&self) -> &str {
        &self.alias_fqdn
    }

    /// Target name, e.g. `web.home.`
    pub fn value(&self) -> &str {
        &self.target_fqdn
    }

    pub fn alias_hostname(&self) -> &str {
        &self.alias_hostname
    }

    pub fn alias_domain(&self) -> &str {
        &self.alias_domain
    }

    pub fn target_hostname(&self) -> &str {
        &self.target_hostname
    }

    pub fn target_domain(&self) -> &str {
        &self.target_domain
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }
}

/// DNS PTR record. Key is the reverse name, value the FQDN of `hostname.domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtrRecord {
    arpa: String,
    hostname: String,
    domain: String,
    source: RecordSource,
    fqdn: String,
}

impl PtrRecord {
    /// `arpa` must already be a reverse name; no validation happens here.
    pub fn new(
        arpa: impl Into<String>,
        hostname: impl Into<String>,
        domain: impl Into<String>,
        source: RecordSource,
    ) -> Self {
        let hostname = hostname.into();
        let domain = domain.into();
        let fqdn = fqdn(&hostname, &domain);
        Self {
            arpa: arpa.into(),
            hostname,
            domain,
            source,
            fqdn,
        }
    }

    /// Reverse name, e.g. `50.1.168.192.in-addr.arpa.`
    pub fn key(&self) -> &str {
        &self.arpa
    }

    pub fn value(&self) -> &str {
        &self.fqdn
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    pub(crate) fn set_source(&mut self, source: RecordSource) {
        self.source = source;
    }
}
