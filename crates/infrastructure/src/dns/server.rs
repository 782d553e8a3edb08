use super::engine::ResolutionEngine;
use home_dns_domain::{DomainError, Endpoint, Protocol};
use hickory_proto::op::{Header, Message, MessageType, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use hickory_server::ServerFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Idle timeout for inbound TCP connections.
const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// hickory-server entry point; hands every request to the engine.
#[derive(Clone)]
pub struct DnsServerHandler {
    engine: Arc<ResolutionEngine>,
}

impl DnsServerHandler {
    pub fn new(engine: Arc<ResolutionEngine>) -> Self {
        Self { engine }
    }

    fn to_message(request: &Request) -> Message {
        let header = request.header();
        let mut message = Message::new();
        message
            .set_id(header.id())
            .set_message_type(MessageType::Query)
            .set_op_code(header.op_code())
            .set_recursion_desired(header.recursion_desired())
            .set_checking_disabled(header.checking_disabled());
        message.add_query(request.query().original().clone());
        message
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        debug!(src = %request.src(), protocol = ?request.protocol(), "DNS request received");

        let query = Self::to_message(request);
        let response = self.engine.handle(&query).await;

        let builder = MessageResponseBuilder::from_message_request(request);
        let reply = builder.build(
            response.header().clone(),
            response.answers(),
            response.name_servers(),
            std::iter::empty(),
            response.additionals(),
        );

        match response_handle.send_response(reply).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send DNS response");
                let mut header = Header::new();
                header.set_response_code(ResponseCode::ServFail);
                header.into()
            }
        }
    }
}

/// Listeners bound and registered with hickory-server, ready to serve.
pub struct DnsServer {
    server: ServerFuture<DnsServerHandler>,
    bound: Vec<Endpoint>,
}

impl DnsServer {
    /// Binds every listener: UDP endpoints get a socket, TCP endpoints a listener.
    pub async fn bind(listeners: &[Endpoint], handler: DnsServerHandler) -> Result<Self, DomainError> {
        let mut server = ServerFuture::new(handler);
        let mut bound = Vec::with_capacity(listeners.len());

        for endpoint in listeners {
            let bind_err = |e: std::io::Error| {
                DomainError::IoError(format!("Failed to bind {}: {}", endpoint, e))
            };

            let local = match endpoint.protocol {
                Protocol::Udp => {
                    let socket = UdpSocket::bind(endpoint.addr).await.map_err(bind_err)?;
                    let local = socket.local_addr().map_err(bind_err)?;
                    server.register_socket(socket);
                    local
                }
                Protocol::Tcp => {
                    let listener = TcpListener::bind(endpoint.addr).await.map_err(bind_err)?;
                    let local = listener.local_addr().map_err(bind_err)?;
                    server.register_listener(listener, TCP_TIMEOUT);
                    local
                }
            };

            let endpoint = Endpoint::new(local, endpoint.protocol);
            info!(listener = %endpoint, "DNS server listening");
            bound.push(endpoint);
        }

        Ok(Self { server, bound })
    }

    /// Actual addresses, with ephemeral ports resolved.
    pub fn local_endpoints(&self) -> &[Endpoint] {
        &self.bound
    }

    /// Serves until `shutdown` is cancelled, then drains in-flight requests.
    pub async fn serve(mut self, shutdown: CancellationToken) -> Result<(), DomainError> {
        info!(listeners = self.bound.len(), "DNS server ready to accept queries");

        shutdown.cancelled().await;
        info!("Shutting down DNS server");

        self.server
            .shutdown_gracefully()
            .await
            .map_err(|e| DomainError::IoError(format!("DNS server shutdown failed: {}", e)))
    }
}
