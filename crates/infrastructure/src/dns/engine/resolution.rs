use super::answer::synthesize;
use crate::dns::events::{QueryEvent, QueryTracer};
use crate::dns::forwarding::{FailoverExchanger, MessageBuilder};
use home_dns_domain::{RecordSource, Zone};
use hickory_proto::op::{Message, OpCode, Query};
use hickory_proto::rr::RecordType;
use std::sync::Arc;
use tracing::error;

/// Where a query was sent after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Local,
    Upstream,
    Refused,
}

/// Answers from the merged zone, forwards everything else.
///
/// Routing looks at the first question only. Names under an authoritative
/// suffix never leave the process, even when the tables have no entry.
pub struct ResolutionEngine {
    zone: Arc<Zone>,
    exchanger: FailoverExchanger,
    tracer: QueryTracer,
}

impl ResolutionEngine {
    pub fn new(zone: Arc<Zone>, exchanger: FailoverExchanger, tracer: QueryTracer) -> Self {
        Self {
            zone,
            exchanger,
            tracer,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn route(&self, request: &Message) -> Route {
        match request.queries().first() {
            None => Route::Refused,
            Some(q) if self.zone.is_authoritative_for(&q.name().to_string()) => Route::Local,
            Some(_) if self.exchanger.is_empty() => Route::Refused,
            Some(_) => Route::Upstream,
        }
    }

    pub async fn handle(&self, request: &Message) -> Message {
        match self.route(request) {
            Route::Local => self.answer_locally(request),
            Route::Upstream => self.exchanger.exchange(request).await,
            Route::Refused => {
                if self.tracer.is_enabled() {
                    let name = request
                        .queries()
                        .first()
                        .map(|q| q.name().to_string())
                        .unwrap_or_default();
                    self.tracer.emit(QueryEvent::Refused { name });
                }
                MessageBuilder::refused(request)
            }
        }
    }

    /// Authoritative reply built from the tables. Misses add nothing; the
    /// reply is always NOERROR.
    pub fn answer_locally(&self, request: &Message) -> Message {
        let mut response = MessageBuilder::reply_to(request);
        response.set_authoritative(true);

        if request.op_code() != OpCode::Query {
            return response;
        }

        for query in request.queries() {
            let Some((value, source)) = self.lookup(query) else {
                if self.tracer.is_enabled() {
                    self.tracer.emit(QueryEvent::LocalMiss {
                        name: query.name().to_string(),
                        record_type: query.query_type(),
                    });
                }
                continue;
            };

            if self.tracer.is_enabled() {
                self.tracer.emit(QueryEvent::LocalHit {
                    name: query.name().to_string(),
                    record_type: query.query_type(),
                    value: value.to_string(),
                    source: source.to_string(),
                });
            }

            match synthesize(query.name(), query.query_type(), value) {
                Ok(record) => {
                    response.add_answer(record);
                }
                Err(e) => {
                    error!(
                        name = %query.name(),
                        record_type = %query.query_type(),
                        %value,
                        %source,
                        error = %e,
                        "Skipping unusable local record"
                    );
                }
            }
        }

        response
    }

    fn lookup(&self, query: &Query) -> Option<(&str, &RecordSource)> {
        let name = query.name().to_string();
        let tables = self.zone.tables();

        match query.query_type() {
            RecordType::A => tables.a(&name).map(|r| (r.value(), r.source())),
            RecordType::PTR => tables.ptr(&name).map(|r| (r.value(), r.source())),
            RecordType::CNAME => tables.cname(&name).map(|r| (r.value(), r.source())),
            _ => None,
        }
    }
}
