use crate::config::{ARecordEntry, CnameEntry, PtrEntry, DEFAULT_DOMAIN};
use crate::dns_record::{reverse_name, ARecord, CnameRecord, PtrRecord, RecordSource, SourceTag};
use crate::DomainError;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Records one provider produced for one DNS domain, already normalized.
///
/// Only `DomainBuilder` creates these, so every record in here has passed
/// validation and every A record has its PTR counterpart.
#[derive(Debug, Clone, Default)]
pub struct Domain {
    name: String,
    a_records: Vec<ARecord>,
    cname_records: Vec<CnameRecord>,
    ptr_records: Vec<PtrRecord>,
}

impl Domain {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn a_records(&self) -> &[ARecord] {
        &self.a_records
    }

    pub fn cname_records(&self) -> &[CnameRecord] {
        &self.cname_records
    }

    pub fn ptr_records(&self) -> &[PtrRecord] {
        &self.ptr_records
    }

    pub fn is_empty(&self) -> bool {
        self.a_records.is_empty() && self.cname_records.is_empty() && self.ptr_records.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<ARecord>, Vec<CnameRecord>, Vec<PtrRecord>) {
        (self.name, self.a_records, self.cname_records, self.ptr_records)
    }
}

/// Collects raw entries from a provider and turns them into a `Domain`.
///
/// `build` runs the normalization steps in order:
/// 1. A records are validated and inherit the domain name when theirs is empty.
/// 2. Each A record gets a derived PTR (`derived`), last one wins per reverse name.
/// 3. CNAME records are validated and inherit alias/target domains.
/// 4. Explicit PTRs either re-tag the derived PTR with the same key as
///    `explicit-and-derived`, or are inserted as `explicit` under the reverse
///    name derived from their own `arpa` field.
#[derive(Debug)]
pub struct DomainBuilder {
    name: String,
    provider: Arc<str>,
    a_entries: Vec<(ARecordEntry, SourceTag)>,
    cname_entries: Vec<CnameEntry>,
    ptr_entries: Vec<PtrEntry>,
}

impl DomainBuilder {
    /// An empty `name` falls back to `DEFAULT_DOMAIN`.
    pub fn new(name: impl Into<String>, provider: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                DEFAULT_DOMAIN.to_string()
            } else {
                name
            },
            provider: provider.into(),
            a_entries: Vec::new(),
            cname_entries: Vec::new(),
            ptr_entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queues an A record; `tag` is kept on the record, its PTR is always `derived`.
    pub fn a_record(&mut self, entry: ARecordEntry, tag: SourceTag) -> &mut Self {
        self.a_entries.push((entry, tag));
        self
    }

    pub fn cname_record(&mut self, entry: CnameEntry) -> &mut Self {
        self.cname_entries.push(entry);
        self
    }

    pub fn ptr_record(&mut self, entry: PtrEntry) -> &mut Self {
        self.ptr_entries.push(entry);
        self
    }

    /// Runs the normalization; the first invalid entry fails the whole domain.
    pub fn build(self) -> Result<Domain, DomainError> {
        let source = |tag| RecordSource::new(Arc::clone(&self.provider), tag);
        let or_default = |domain: String| {
            if domain.is_empty() {
                self.name.clone()
            } else {
                domain
            }
        };

        let mut ptrs = PtrSet::default();

        let mut a_records = Vec::with_capacity(self.a_entries.len());
        for (entry, tag) in self.a_entries.iter().cloned() {
            let record = ARecord::new(entry.hostname, or_default(entry.domain), entry.ip, source(tag))?;

            let arpa = reverse_name(record.value())?;
            ptrs.upsert(PtrRecord::new(
                arpa,
                record.hostname(),
                record.domain(),
                source(SourceTag::Derived),
            ));

            a_records.push(record);
        }

        let mut cname_records = Vec::with_capacity(self.cname_entries.len());
        for entry in self.cname_entries.iter().cloned() {
            cname_records.push(CnameRecord::new(
                entry.alias_hostname,
                or_default(entry.alias_domain),
                entry.target_hostname,
                or_default(entry.target_domain),
                source(SourceTag::Explicit),
            )?);
        }

        for entry in self.ptr_entries.iter().cloned() {
            if let Some(existing) = ptrs.get_derived_mut(&entry.arpa) {
                existing.set_source(source(SourceTag::ExplicitAndDerived));
                continue;
            }

            // The arpa field is reversed again, so only dotted-quads survive here.
            let arpa = reverse_name(&entry.arpa)?;
            ptrs.upsert(PtrRecord::new(
                arpa,
                entry.hostname,
                or_default(entry.domain),
                source(SourceTag::Explicit),
            ));
        }

        Ok(Domain {
            name: self.name,
            a_records,
            cname_records,
            ptr_records: ptrs.into_records(),
        })
    }
}

/// PTR records keyed by reverse name, kept in first-insertion order.
#[derive(Default)]
struct PtrSet {
    index: FxHashMap<String, usize>,
    records: Vec<PtrRecord>,
}

impl PtrSet {
    fn upsert(&mut self, record: PtrRecord) {
        match self.index.get(record.key()) {
            Some(&i) => self.records[i] = record,
            None => {
                self.index.insert(record.key().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    fn get_derived_mut(&mut self, key: &str) -> Option<&mut PtrRecord> {
        let i = *self.index.get(key)?;
        let record = &mut self.records[i];
        matches!(
            record.source().tag,
            SourceTag::Derived | SourceTag::ExplicitAndDerived
        )
        .then_some(record)
    }

    fn into_records(self) -> Vec<PtrRecord> {
        self.records
    }
}
