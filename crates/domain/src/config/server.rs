use serde::{Deserialize, Serialize};

/// Largest UDP payload a single datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65535;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Receive buffer size; longer datagrams are truncated by the socket.
    #[serde(default = "default_max_datagram_size")]
    pub max_datagram_size: usize,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            max_datagram_size: default_max_datagram_size(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_dns_port() -> u16 {
    2053
}

fn default_max_datagram_size() -> usize {
    512
}
