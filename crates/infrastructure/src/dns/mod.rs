pub mod engine;
pub mod events;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use engine::ResolutionEngine;
pub use events::QueryTracer;
pub use forwarding::FailoverExchanger;
pub use server::{DnsServer, DnsServerHandler};
