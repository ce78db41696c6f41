//! loopdns application layer: turns a request datagram into a response.
pub mod ports;
pub mod services;
pub mod use_cases;
