//! Local resolution: routing, table lookup and answer synthesis.

pub mod answer;
pub mod resolution;

pub use answer::{synthesize, LOCAL_ANSWER_TTL};
pub use resolution::{ResolutionEngine, Route};
