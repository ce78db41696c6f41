#![allow(dead_code)]
use loopdns_application::use_cases::ProcessDatagramUseCase;
use loopdns_infrastructure::dns::transport::{bind_udp_socket, serve};
use loopdns_infrastructure::dns::{DnsServerHandler, StaticAnswerResolver};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// The real serve loop on an ephemeral loopback port.
pub struct TestDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestDnsServer {
    pub async fn start() -> Self {
        Self::start_with(StaticAnswerResolver::default(), 512).await
    }

    pub async fn start_with(resolver: StaticAnswerResolver, max_datagram_size: usize) -> Self {
        let socket = bind_udp_socket("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = socket.local_addr().unwrap();

        let use_case = Arc::new(ProcessDatagramUseCase::new(Arc::new(resolver)));
        let handler = DnsServerHandler::new(use_case);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve(socket, handler, max_datagram_size, async move {
            let _ = shutdown_rx.await;
        }));

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Sends `query` from a fresh socket and waits briefly for a reply.
    pub async fn exchange(&self, query: &[u8]) -> Option<Vec<u8>> {
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        client.send_to(query, self.addr).await.unwrap();

        let mut buf = vec![0u8; 4096];
        match tokio::time::timeout(Duration::from_millis(500), client.recv_from(&mut buf)).await {
            Ok(Ok((len, from))) => {
                assert_eq!(from, self.addr);
                buf.truncate(len);
                Some(buf)
            }
            _ => None,
        }
    }

    pub async fn shutdown(mut self) -> std::io::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        match self.task.take() {
            Some(task) => task.await.unwrap(),
            None => Ok(()),
        }
    }
}

impl Drop for TestDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
