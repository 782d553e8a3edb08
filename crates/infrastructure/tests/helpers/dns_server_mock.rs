#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock upstream answers every query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// NOERROR with one A record for the question
    Answer(Ipv4Addr),
    /// No answers, the given RCODE (e.g. 2 = SERVFAIL)
    Rcode(u8),
    /// Correct answer but with a transaction ID one off
    WrongId,
    /// Bytes that do not parse as a DNS message
    Garbage,
    /// Never replies
    Silent,
}

/// Mock upstream DNS server bound on `127.0.0.1:0`.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_udp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn start_tcp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            if let Some(response) = build_response(&query, behavior) {
                                let mut frame = (response.len() as u16).to_be_bytes().to_vec();
                                frame.extend_from_slice(&response);
                                let _ = stream.write_all(&frame).await;
                            } else {
                                // Hold the connection open so the client times out
                                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Hand-built wire response: header copied from the query, question echoed,
/// and for `Answer` one A record pointing back at the question.
fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let (rcode, answer) = match behavior {
        MockBehavior::Silent => return None,
        MockBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
        MockBehavior::Answer(ip) => (0u8, Some(ip)),
        MockBehavior::WrongId => (0u8, Some(Ipv4Addr::new(192, 0, 2, 1))),
        MockBehavior::Rcode(code) => (code & 0x0f, None),
    };

    let mut response = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]);
    let id = match behavior {
        MockBehavior::WrongId => id.wrapping_add(1),
        _ => id,
    };
    response.extend_from_slice(&id.to_be_bytes());

    // QR=1, opcode 0, RD=1; RA=1 and the RCODE
    response.push(0x81);
    response.push(0x80 | rcode);

    // QDCOUNT copied, ANCOUNT, NSCOUNT, ARCOUNT
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, u8::from(answer.is_some())]);
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    // Question section; assumes the query carries no additional records
    response.extend_from_slice(&query[12..]);

    if let Some(ip) = answer {
        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length
        ]);
        response.extend_from_slice(&ip.octets());
    }

    Some(response)
}
