use loopdns_application::use_cases::ProcessDatagramUseCase;
use loopdns_domain::Header;
use loopdns_infrastructure::dns::{DnsServerHandler, StaticAnswerResolver};
use std::net::SocketAddr;
use std::sync::Arc;

mod helpers;
use helpers::QueryBuilder;

fn handler() -> DnsServerHandler {
    let use_case = ProcessDatagramUseCase::new(Arc::new(StaticAnswerResolver::default()));
    DnsServerHandler::new(Arc::new(use_case))
}

fn client() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

#[test]
fn test_handle_valid_query() {
    let query = QueryBuilder::new("example.com").id(0xABCD).build();

    let response = handler().handle_datagram(&query, client()).unwrap();
    let header = Header::from_bytes(&response).unwrap();

    assert_eq!(header.id, 0xABCD);
    assert!(header.is_response());
    assert_eq!(&response[response.len() - 4..], &[127, 0, 0, 1]);
}

#[test]
fn test_handle_short_datagram_is_dropped() {
    assert!(handler().handle_datagram(&[0x01, 0x02], client()).is_none());
}

#[test]
fn test_handle_header_only_datagram_is_dropped() {
    assert!(handler().handle_datagram(&[0u8; 12], client()).is_none());
}
