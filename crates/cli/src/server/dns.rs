use loopdns_domain::config::ServerConfig;
use loopdns_infrastructure::dns::transport::{bind_udp_socket, serve};
use loopdns_infrastructure::dns::DnsServerHandler;
use std::future::Future;
use std::net::SocketAddr;
use tracing::info;

pub async fn start_dns_server<F>(
    config: &ServerConfig,
    handler: DnsServerHandler,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let socket_addr: SocketAddr = config.listen_addr().parse()?;
    let socket = bind_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, "Starting DNS server");

    serve(socket, handler, config.max_datagram_size, shutdown).await?;
    Ok(())
}
