use loopdns_application::use_cases::ProcessDatagramUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bridges the socket loop and the datagram use case: logs what arrived and
/// turns decode failures into a dropped datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ProcessDatagramUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ProcessDatagramUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back, or `None` when nothing should be sent.
    pub fn handle_datagram(&self, datagram: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        debug!(
            size = datagram.len(),
            client = %from,
            bytes = %hex(datagram),
            "Received datagram"
        );

        match self.use_case.respond(datagram) {
            Ok(response) => {
                info!(
                    id = response.header.id,
                    client = %from,
                    domain = %response.question.domain(),
                    record_type = %response.question.record_type,
                    class = %response.question.class,
                    rcode = response.header.rcode(),
                    "Answered query"
                );
                Some(response.encode())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    client = %from,
                    size = datagram.len(),
                    "Dropping malformed datagram"
                );
                None
            }
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{:02x}", b);
        out
    })
}
