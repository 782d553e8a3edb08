use home_dns_domain::DomainError;
use hickory_proto::rr::rdata::{A, CNAME, PTR};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// TTL on every locally synthesized answer.
pub const LOCAL_ANSWER_TTL: u32 = 3600;

/// Builds the resource record `<owner> 3600 IN <type> <value>`.
///
/// `value` is the table value: an IPv4 address for A, a name otherwise.
pub fn synthesize(owner: &Name, record_type: RecordType, value: &str) -> Result<Record, DomainError> {
    let rdata = match record_type {
        RecordType::A => {
            let ip = Ipv4Addr::from_str(value)
                .map_err(|_| DomainError::InvalidAddress(value.to_string()))?;
            RData::A(A(ip))
        }
        RecordType::PTR => RData::PTR(PTR(parse_name(value)?)),
        RecordType::CNAME => RData::CNAME(CNAME(parse_name(value)?)),
        other => {
            return Err(DomainError::InvalidDnsResponse(format!(
                "cannot synthesize {} records",
                other
            )))
        }
    };

    Ok(Record::from_rdata(owner.clone(), LOCAL_ANSWER_TTL, rdata))
}

fn parse_name(value: &str) -> Result<Name, DomainError> {
    Name::from_ascii(value)
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", value, e)))
}
