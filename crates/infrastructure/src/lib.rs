//! loopdns infrastructure: answer resolver and UDP transport.
pub mod dns;
