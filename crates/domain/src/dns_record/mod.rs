pub mod names;
pub mod record;
pub mod source;

pub use names::{clean_hostname, fqdn, reverse_name, REVERSE_SUFFIX};
pub use record::{ARecord, CnameRecord, PtrRecord};
pub use source::{RecordSource, SourceTag};
