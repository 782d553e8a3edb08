use std::fmt;
use std::sync::Arc;

/// How a record entered its provider's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTag {
    /// Listed verbatim in configuration
    Explicit,
    /// PTR synthesized from an A record
    Derived,
    /// Derived PTR that was also listed explicitly
    ExplicitAndDerived,
    /// Inventory: connected client
    Client,
    /// Inventory: router interface / network
    Interface,
    /// Inventory: managed network device
    Device,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Explicit => "explicit",
            SourceTag::Derived => "derived",
            SourceTag::ExplicitAndDerived => "explicit-and-derived",
            SourceTag::Client => "client",
            SourceTag::Interface => "interface",
            SourceTag::Device => "device",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of a record: which provider produced it and along which path.
///
/// Renders as `provider:tag`, e.g. `config:derived`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordSource {
    pub provider: Arc<str>,
    pub tag: SourceTag,
}

impl RecordSource {
    pub fn new(provider: impl Into<Arc<str>>, tag: SourceTag) -> Self {
        Self {
            provider: provider.into(),
            tag,
        }
    }

    pub fn with_tag(&self, tag: SourceTag) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            tag,
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.tag)
    }
}
