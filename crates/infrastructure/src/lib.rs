//! home-dns infrastructure: DNS engine, upstream forwarding, listeners and
//! record providers.
pub mod dns;
pub mod providers;
