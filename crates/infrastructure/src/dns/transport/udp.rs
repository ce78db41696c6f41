//! UDP listener for DNS queries (RFC 1035 §4.2.1).
//!
//! Messages are carried one per datagram with no framing. Queries are
//! handled strictly one at a time: the loop receives, answers, sends, and
//! only then receives again.

use crate::dns::server::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Binds a non-blocking UDP socket on `addr` and registers it with the
/// current tokio runtime.
pub fn bind_udp_socket(addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

/// Runs the receive/answer/send loop until `shutdown` resolves.
///
/// Datagrams longer than `max_datagram_size` are truncated by the socket and
/// then usually fail to decode. Receive and send errors are logged and the
/// loop keeps going.
pub async fn serve<F>(
    socket: UdpSocket,
    handler: DnsServerHandler,
    max_datagram_size: usize,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let local_addr = socket.local_addr()?;
    info!(bind_address = %local_addr, max_datagram_size, "DNS server listening");

    let mut recv_buf = vec![0u8; max_datagram_size];
    tokio::pin!(shutdown);

    loop {
        let (len, from) = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!(bind_address = %local_addr, "DNS server shutting down");
                return Ok(());
            }
            result = socket.recv_from(&mut recv_buf) => match result {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let Some(response) = handler.handle_datagram(&recv_buf[..len], from) else {
            continue;
        };

        match socket.send_to(&response, from).await {
            Ok(sent) => debug!(client = %from, bytes_sent = sent, "Response sent"),
            Err(e) => error!(error = %e, client = %from, "Failed to send response"),
        }
    }
}
