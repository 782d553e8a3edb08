//! DNS Message Builder
//!
//! Constructs queries and reply skeletons with `hickory-proto`.

use home_dns_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

/// Builds DNS messages and serializes them to wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Standard recursive query: random ID, RD set, one IN question.
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Message, DomainError> {
        let name = Name::from_ascii(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(Query::query(name, record_type));

        Ok(message)
    }

    /// Empty NOERROR response echoing id, opcode, RD, CD and the questions.
    pub fn reply_to(request: &Message) -> Message {
        let mut reply = Message::new();
        reply
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_checking_disabled(request.checking_disabled())
            .set_response_code(ResponseCode::NoError);
        reply.add_queries(request.queries().iter().cloned());
        reply
    }

    pub fn refused(request: &Message) -> Message {
        let mut reply = Self::reply_to(request);
        reply.set_response_code(ResponseCode::Refused);
        reply
    }

    pub fn server_failure(request: &Message) -> Message {
        let mut reply = Self::reply_to(request);
        reply.set_response_code(ResponseCode::ServFail);
        reply
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
