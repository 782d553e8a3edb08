use serde::{Deserialize, Serialize};

/// Records that are statically defined in the config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StaticConfig {
    /// Disabled sections are ignored entirely (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// One provider per entry; later domains override earlier ones
    #[serde(default)]
    pub domains: Vec<StaticDomain>,
}

/// A collection of A, CNAME and PTR records sharing a common domain.
///
/// If the domain is not set the default domain ("home") is used, and the same
/// default applies to CNAME alias/target domains. PTR records normally do not
/// need to be listed: one is generated for every A record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticDomain {
    /// Domain name without trailing dot, e.g. "home" (alias: `dnsDomain`)
    #[serde(default, alias = "dnsDomain")]
    pub domain: String,

    /// `aRecords`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub a_records: Vec<ARecordEntry>,

    /// `cnameRecords`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cname_records: Vec<CnameEntry>,

    /// `ptrRecords`; only needed for addresses without an A record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ptr_records: Vec<PtrEntry>,
}

/// Hostname → IPv4 mapping
///
/// ```
/// use home_dns_domain::config::ARecordEntry;
///
/// let entry = ARecordEntry::new("nas", "192.168.1.100");
/// assert!(entry.domain.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ARecordEntry {
    /// Overrides the enclosing domain when set
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    /// Hostname (required); whitespace runs collapse to one space
    #[serde(default)]
    pub hostname: String,

    /// Dotted-quad IPv4 address (required)
    #[serde(default)]
    pub ip: String,
}

impl ARecordEntry {
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            domain: String::new(),
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }

    /// Places the record in `domain` instead of the enclosing one.
    pub fn in_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// Alias → target mapping
///
/// ```
/// use home_dns_domain::config::CnameEntry;
///
/// let entry: CnameEntry =
///     serde_json::from_str(r#"{"aliasHostname": "www", "targetHostname": "web"}"#).unwrap();
/// assert_eq!(entry, CnameEntry::new("www", "web"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CnameEntry {
    /// Alias hostname (required)
    #[serde(default)]
    pub alias_hostname: String,

    /// Alias domain (default: enclosing domain)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias_domain: String,

    /// Target hostname (required)
    #[serde(default)]
    pub target_hostname: String,

    /// Target domain (default: enclosing domain)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_domain: String,
}

impl CnameEntry {
    pub fn new(alias_hostname: impl Into<String>, target_hostname: impl Into<String>) -> Self {
        Self {
            alias_hostname: alias_hostname.into(),
            target_hostname: target_hostname.into(),
            ..Default::default()
        }
    }
}

/// Explicit PTR entry.
///
/// `arpa` is expected to hold the dotted-quad address being reversed,
/// e.g. `192.168.1.10`; the reverse name is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PtrEntry {
    /// Address to reverse, or the reverse name of an A record in the same domain
    #[serde(default)]
    pub arpa: String,

    /// Hostname the PTR points at
    #[serde(default)]
    pub hostname: String,

    /// Domain of `hostname` (default: enclosing domain)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
}

impl PtrEntry {
    pub fn new(arpa: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            arpa: arpa.into(),
            hostname: hostname.into(),
            domain: String::new(),
        }
    }
}
