#![allow(dead_code)]
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use home_dns_domain::DomainError;
use home_dns_infrastructure::dns::forwarding::MessageBuilder;
use home_dns_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Canned outcome of a `StubTransport` exchange.
#[derive(Debug, Clone)]
pub enum StubReply {
    Answer(Ipv4Addr),
    Rcode(ResponseCode),
    WrongId,
    Garbage,
    Timeout,
    Refused,
}

/// In-process transport that never touches the network.
pub struct StubTransport {
    reply: StubReply,
    calls: Arc<AtomicUsize>,
}

impl StubTransport {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl DnsTransport for StubTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let request = Message::from_vec(message_bytes).expect("stub received an invalid query");
        let mut response = MessageBuilder::reply_to(&request);

        match &self.reply {
            StubReply::Timeout => return Err(DomainError::QueryTimeout),
            StubReply::Refused => {
                return Err(DomainError::Transport("connection refused".to_string()))
            }
            StubReply::Garbage => {
                return Ok(TransportResponse {
                    bytes: vec![0xff; 5],
                })
            }
            StubReply::Answer(ip) => {
                let name = request.queries()[0].name().clone();
                response.add_answer(Record::from_rdata(name, 60, RData::A(A(*ip))));
            }
            StubReply::Rcode(rcode) => {
                response.set_response_code(*rcode);
            }
            StubReply::WrongId => {
                response.set_id(request.id().wrapping_add(1));
            }
        }

        Ok(TransportResponse {
            bytes: MessageBuilder::serialize(&response)?,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "STUB"
    }
}
