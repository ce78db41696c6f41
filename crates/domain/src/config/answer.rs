use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The synthetic A record returned for every question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerConfig {
    #[serde(default = "default_address")]
    pub address: Ipv4Addr,

    #[serde(default = "default_ttl")]
    pub ttl: i32,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            ttl: default_ttl(),
        }
    }
}

fn default_address() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

fn default_ttl() -> i32 {
    60
}
