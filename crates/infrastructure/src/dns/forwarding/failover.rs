use super::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::events::{QueryEvent, QueryTracer, UpstreamOutcome};
use crate::dns::transport::{create_transport, DnsTransport, DEFAULT_TIMEOUT};
use bytes::Bytes;
use home_dns_domain::{DomainError, Endpoint};
use hickory_proto::op::Message;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// One upstream server and the transport used to reach it.
#[derive(Clone)]
pub struct Upstream {
    endpoint: Endpoint,
    transport: Arc<dyn DnsTransport>,
}

impl Upstream {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        let transport = create_transport(&endpoint);
        Self::new(endpoint, transport)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl std::fmt::Debug for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upstream")
            .field("endpoint", &self.endpoint)
            .field("protocol", &self.transport.protocol_name())
            .finish()
    }
}

/// Forwards a query to the upstreams in configured order and relays the
/// first acceptable reply.
///
/// A reply is acceptable when it parses, carries the request's ID and has
/// rcode NOERROR. One pass over the list, no retries; when nothing is
/// acceptable the requester gets SERVFAIL.
#[derive(Debug, Clone)]
pub struct FailoverExchanger {
    upstreams: Vec<Upstream>,
    timeout: Duration,
    tracer: QueryTracer,
}

impl FailoverExchanger {
    pub fn new(upstreams: Vec<Upstream>, tracer: QueryTracer) -> Self {
        Self {
            upstreams,
            timeout: DEFAULT_TIMEOUT,
            tracer,
        }
    }

    pub fn from_endpoints(endpoints: &[Endpoint], tracer: QueryTracer) -> Self {
        let upstreams = endpoints.iter().copied().map(Upstream::from_endpoint).collect();
        Self::new(upstreams, tracer)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.upstreams.is_empty()
    }

    pub fn upstreams(&self) -> &[Upstream] {
        &self.upstreams
    }

    pub async fn exchange(&self, request: &Message) -> Message {
        let query_bytes = match MessageBuilder::serialize(request) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Cannot re-encode request for forwarding");
                return MessageBuilder::server_failure(request);
            }
        };

        for upstream in &self.upstreams {
            let start = Instant::now();
            let result = self.attempt(upstream, &query_bytes, request.id()).await;

            if self.tracer.is_enabled() {
                self.tracer.emit(QueryEvent::UpstreamAttempt {
                    server: upstream.endpoint.to_string(),
                    protocol: upstream.transport.protocol_name(),
                    response_time_us: start.elapsed().as_micros() as u64,
                    outcome: match &result {
                        Ok(_) => UpstreamOutcome::Accepted,
                        Err(e) => UpstreamOutcome::Rejected(e.to_string()),
                    },
                });
            }

            match result {
                Ok(response) => {
                    debug!(server = %upstream.endpoint, "Relaying upstream response");
                    return response.message;
                }
                Err(e) if ResponseParser::is_transport_error(&e) => {
                    warn!(server = %upstream.endpoint, error = %e, "Upstream unreachable, trying next");
                }
                Err(e) => {
                    warn!(server = %upstream.endpoint, error = %e, "Upstream response rejected, trying next");
                }
            }
        }

        warn!(
            upstreams = self.upstreams.len(),
            "No upstream produced a usable response"
        );
        MessageBuilder::server_failure(request)
    }

    async fn attempt(
        &self,
        upstream: &Upstream,
        query_bytes: &[u8],
        expected_id: u16,
    ) -> Result<DnsResponse, DomainError> {
        let transport_response = upstream.transport.send(query_bytes, self.timeout).await?;
        let response = ResponseParser::parse_bytes(Bytes::from(transport_response.bytes))?;

        if response.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "ID mismatch: expected {}, got {}",
                expected_id,
                response.id()
            )));
        }

        if !response.is_success() {
            return Err(DomainError::UpstreamFailure {
                server: upstream.endpoint.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        Ok(response)
    }
}
