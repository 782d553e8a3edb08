//! Per-query diagnostics
//!
//! - `QueryEvent`: local hit/miss, refusal, upstream attempt
//! - `QueryTracer`: injected switch deciding whether events are produced at all

pub mod tracer;
pub mod types;

pub use tracer::QueryTracer;
pub use types::{QueryEvent, UpstreamOutcome};
