use hickory_proto::rr::RecordType;
use tracing::debug;

/// Outcome of one exchange with one upstream server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamOutcome {
    Accepted,
    Rejected(String),
}

/// Per-query diagnostic event.
///
/// Only built when the tracer is enabled, so the hot path pays nothing for
/// these strings when debug mode is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// Name found in the local tables
    LocalHit {
        name: String,
        record_type: RecordType,
        value: String,
        source: String,
    },

    /// Name under an authoritative suffix but absent from the tables
    LocalMiss {
        name: String,
        record_type: RecordType,
    },

    /// Not authoritative and nowhere to forward
    Refused { name: String },

    /// One attempt against one upstream server
    UpstreamAttempt {
        server: String,
        protocol: &'static str,
        response_time_us: u64,
        outcome: UpstreamOutcome,
    },
}

impl QueryEvent {
    pub(super) fn log(&self) {
        match self {
            QueryEvent::LocalHit {
                name,
                record_type,
                value,
                source,
            } => debug!(%name, %record_type, %value, %source, "Local answer"),
            QueryEvent::LocalMiss { name, record_type } => {
                debug!(%name, %record_type, "No local record")
            }
            QueryEvent::Refused { name } => debug!(%name, "Refused, no upstream configured"),
            QueryEvent::UpstreamAttempt {
                server,
                protocol,
                response_time_us,
                outcome,
            } => match outcome {
                UpstreamOutcome::Accepted => {
                    debug!(%server, protocol, response_time_us, "Upstream answered")
                }
                UpstreamOutcome::Rejected(reason) => {
                    debug!(%server, protocol, response_time_us, %reason, "Upstream attempt failed")
                }
            },
        }
    }
}
