#![allow(dead_code)]
use home_dns_domain::config::{ARecordEntry, CnameEntry, PtrEntry};
use home_dns_domain::{DomainBuilder, SourceTag, Zone, ZoneBuilder};
use hickory_proto::op::{Message, OpCode};
use hickory_proto::rr::RecordType;
use home_dns_infrastructure::dns::forwarding::MessageBuilder;
use std::sync::Arc;

/// Zone used by most engine tests:
/// `web.home. -> 192.168.1.50`, `NAS.home. -> 192.168.1.10`,
/// `Kitchen-Speaker.home. -> 192.168.1.20`, `www.home. CNAME web.home.`,
/// `odd.home. -> a.b.c.d`.
pub fn home_zone() -> Arc<Zone> {
    let mut home = DomainBuilder::new("home", "config");
    home.a_record(ARecordEntry::new("web", "192.168.1.50"), SourceTag::Explicit)
        .a_record(ARecordEntry::new("NAS", "192.168.1.10"), SourceTag::Explicit)
        .a_record(ARecordEntry::new("odd", "a.b.c.d"), SourceTag::Explicit)
        .a_record(ARecordEntry::new("Kitchen-Speaker", "192.168.1.20"), SourceTag::Explicit)
        .cname_record(CnameEntry::new("www", "web"))
        .ptr_record(PtrEntry::new("10.0.0.9", "printer"));

    let mut zone = ZoneBuilder::new();
    zone.merge(home.build().expect("home zone is valid"));
    Arc::new(zone.finish())
}

pub fn query(name: &str, record_type: RecordType) -> Message {
    MessageBuilder::build_query(name, record_type).expect("valid query name")
}

pub fn query_with_opcode(name: &str, record_type: RecordType, op_code: OpCode) -> Message {
    let mut message = query(name, record_type);
    message.set_op_code(op_code);
    message
}
