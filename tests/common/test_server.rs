use hickory_proto::op::Message;
use hickory_proto::rr::RecordType;
use home_dns_application::ports::RecordProvider;
use home_dns_application::use_cases::BuildZoneUseCase;
use home_dns_domain::{Config, Endpoint, Protocol};
use home_dns_infrastructure::dns::forwarding::MessageBuilder;
use home_dns_infrastructure::dns::transport::{create_transport, DnsTransport};
use home_dns_infrastructure::dns::{
    DnsServer, DnsServerHandler, FailoverExchanger, QueryTracer, ResolutionEngine,
};
use home_dns_infrastructure::providers::StaticRecordProvider;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Full stack wired the way the binary does it, on ephemeral loopback ports.
pub struct TestServer {
    endpoints: Vec<Endpoint>,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(config: Config) -> Result<Self, String> {
        config.validate().map_err(|e| e.to_string())?;

        let providers: Vec<Arc<dyn RecordProvider>> = config
            .enabled_static()
            .map(StaticRecordProvider::from_config)
            .unwrap_or_default()
            .into_iter()
            .map(|p| Arc::new(p) as Arc<dyn RecordProvider>)
            .collect();
        let zone = BuildZoneUseCase::new(providers)
            .execute()
            .await
            .map_err(|e| e.to_string())?;

        let upstreams = config.upstream_endpoints().map_err(|e| e.to_string())?;
        // Config ports of 0 mean 53, so listeners are always ephemeral loopback here
        let loopback = SocketAddr::from(([127, 0, 0, 1], 0));
        let listeners = [Endpoint::udp(loopback), Endpoint::tcp(loopback)];

        let tracer = QueryTracer::new_disabled();
        let exchanger = FailoverExchanger::from_endpoints(&upstreams, tracer.clone())
            .with_timeout(Duration::from_millis(300));
        let engine = ResolutionEngine::new(Arc::new(zone), exchanger, tracer);

        let server = DnsServer::bind(&listeners, DnsServerHandler::new(Arc::new(engine)))
            .await
            .map_err(|e| e.to_string())?;
        let endpoints = server.local_endpoints().to_vec();

        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        let handle = tokio::spawn(async move {
            let _ = server.serve(token).await;
        });

        Ok(Self {
            endpoints,
            shutdown,
            handle,
        })
    }

    pub fn endpoint(&self, protocol: Protocol) -> Endpoint {
        *self
            .endpoints
            .iter()
            .find(|e| e.protocol == protocol)
            .expect("listener for protocol")
    }

    pub async fn shutdown(self) {
        self.shutdown.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Sends single questions to a listener using the forwarding transports.
pub struct TestClient {
    endpoint: Endpoint,
}

impl TestClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub async fn query(&self, name: &str, record_type: RecordType) -> Result<Message, String> {
        let request = MessageBuilder::build_query(name, record_type).map_err(|e| e.to_string())?;
        let bytes = MessageBuilder::serialize(&request).map_err(|e| e.to_string())?;

        let transport = create_transport(&self.endpoint);
        let response = transport
            .send(&bytes, Duration::from_secs(3))
            .await
            .map_err(|e| e.to_string())?;

        let message = Message::from_vec(&response.bytes).map_err(|e| e.to_string())?;
        if message.id() != request.id() {
            return Err(format!("id mismatch: {} != {}", message.id(), request.id()));
        }
        Ok(message)
    }
}

/// UDP upstream answering every A question with `answer`, or staying silent.
pub struct FakeUpstream {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown: CancellationToken,
}

impl FakeUpstream {
    pub async fn answering(answer: Ipv4Addr) -> Self {
        Self::start(Some(answer)).await
    }

    pub async fn silent() -> Self {
        Self::start(None).await
    }

    async fn start(answer: Option<Ipv4Addr>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind fake upstream");
        let addr = socket.local_addr().expect("fake upstream address");
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 1024];
            loop {
                let (len, peer) = tokio::select! {
                    _ = token.cancelled() => break,
                    received = socket.recv_from(&mut buf) => match received {
                        Ok(r) => r,
                        Err(_) => continue,
                    },
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let Some(ip) = answer else { continue };
                let Ok(request) = Message::from_vec(&buf[..len]) else { continue };

                let mut reply = MessageBuilder::reply_to(&request);
                reply.set_recursion_available(true);
                if let Some(q) = request.queries().first() {
                    reply.add_answer(hickory_proto::rr::Record::from_rdata(
                        q.name().clone(),
                        60,
                        hickory_proto::rr::RData::A(hickory_proto::rr::rdata::A(ip)),
                    ));
                }
                if let Ok(bytes) = MessageBuilder::serialize(&reply) {
                    let _ = socket.send_to(&bytes, peer).await;
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
