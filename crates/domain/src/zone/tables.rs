use super::authority::AuthoritativeZones;
use super::domain::Domain;
use crate::dns_record::{ARecord, CnameRecord, PtrRecord};
use rustc_hash::FxHashMap;

/// Name-keyed lookup tables, one per record type.
///
/// Keys are exact: no case folding and always with the trailing dot.
#[derive(Debug, Default)]
pub struct ResolutionTables {
    a: FxHashMap<String, ARecord>,
    cname: FxHashMap<String, CnameRecord>,
    ptr: FxHashMap<String, PtrRecord>,
}

impl ResolutionTables {
    /// Exact-match lookup by owner name, trailing dot included.
    pub fn a(&self, name: &str) -> Option<&ARecord> {
        self.a.get(name)
    }

    pub fn cname(&self, name: &str) -> Option<&CnameRecord> {
        self.cname.get(name)
    }

    pub fn ptr(&self, name: &str) -> Option<&PtrRecord> {
        self.ptr.get(name)
    }

    pub fn a_len(&self) -> usize {
        self.a.len()
    }

    pub fn cname_len(&self) -> usize {
        self.cname.len()
    }

    pub fn ptr_len(&self) -> usize {
        self.ptr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.cname.is_empty() && self.ptr.is_empty()
    }
}

/// Accumulates provider domains; later merges overwrite earlier keys.
#[derive(Debug, Default)]
pub struct ZoneBuilder {
    tables: ResolutionTables,
    domains: Vec<String>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every record of `domain`, replacing entries with the same key.
    ///
    /// ```
    /// use home_dns_domain::config::ARecordEntry;
    /// use home_dns_domain::{DomainBuilder, SourceTag, ZoneBuilder};
    ///
    /// let mut first = DomainBuilder::new("home", "unifi");
    /// first.a_record(ARecordEntry::new("nas", "192.168.1.10"), SourceTag::Client);
    /// let mut second = DomainBuilder::new("home", "config");
    /// second.a_record(ARecordEntry::new("nas", "192.168.1.20"), SourceTag::Explicit);
    ///
    /// let mut zone = ZoneBuilder::new();
    /// zone.merge(first.build().unwrap()).merge(second.build().unwrap());
    /// let zone = zone.finish();
    ///
    /// assert_eq!(zone.tables().a("nas.home.").unwrap().value(), "192.168.1.20");
    /// ```
    pub fn merge(&mut self, domain: Domain) -> &mut Self {
        let (name, a_records, cname_records, ptr_records) = domain.into_parts();

        if !self.domains.contains(&name) {
            self.domains.push(name);
        }

        for record in a_records {
            self.tables.a.insert(record.key().to_string(), record);
        }
        for record in cname_records {
            self.tables.cname.insert(record.key().to_string(), record);
        }
        for record in ptr_records {
            self.tables.ptr.insert(record.key().to_string(), record);
        }

        self
    }

    /// Freezes the tables and registers the authoritative suffixes.
    pub fn finish(self) -> Zone {
        let authority = AuthoritativeZones::new(&self.domains);
        Zone {
            tables: self.tables,
            domains: self.domains,
            authority,
        }
    }
}

/// The merged, read-only zone served by the resolution engine.
#[derive(Debug, Default)]
pub struct Zone {
    tables: ResolutionTables,
    domains: Vec<String>,
    authority: AuthoritativeZones,
}

impl Zone {
    pub fn tables(&self) -> &ResolutionTables {
        &self.tables
    }

    /// Distinct domain names in the order providers first produced them.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn authority(&self) -> &AuthoritativeZones {
        &self.authority
    }

    pub fn is_authoritative_for(&self, name: &str) -> bool {
        self.authority.contains(name)
    }
}
