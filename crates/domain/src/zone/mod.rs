//! Building the in-memory zone.
//!
//! Providers hand in `Domain`s built by `DomainBuilder`; `ZoneBuilder` merges
//! them with last-writer-wins into an immutable `Zone`.

pub mod authority;
pub mod domain;
pub mod tables;

pub use authority::{AuthoritativeZones, PRIVATE_REVERSE_ZONES};
pub use domain::{Domain, DomainBuilder};
pub use tables::{ResolutionTables, Zone, ZoneBuilder};
