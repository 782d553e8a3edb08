//! Forwarding through the listener to fake upstreams.

#[path = "../common/mod.rs"]
mod common;

use common::{home_config, with_nameservers, FakeUpstream, TestClient, TestServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, RecordType};
use home_dns_domain::Protocol;
use std::net::Ipv4Addr;

#[tokio::test]
async fn test_foreign_name_forwarded_to_first_upstream() {
    let upstream = FakeUpstream::answering(Ipv4Addr::new(198, 51, 100, 1)).await;
    let config = with_nameservers(home_config(), &[(upstream.addr(), Protocol::Udp)]);
    let server = TestServer::start(config).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("example.com.", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::A(A(Ipv4Addr::new(198, 51, 100, 1))))
    );
    assert_eq!(upstream.queries_received(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_silent_upstreams_are_skipped_in_order() {
    let first = FakeUpstream::silent().await;
    let second = FakeUpstream::silent().await;
    let third = FakeUpstream::answering(Ipv4Addr::new(198, 51, 100, 3)).await;
    let config = with_nameservers(
        home_config(),
        &[
            (first.addr(), Protocol::Udp),
            (second.addr(), Protocol::Udp),
            (third.addr(), Protocol::Udp),
        ],
    );
    let server = TestServer::start(config).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("example.com.", RecordType::A).await.unwrap();

    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::A(A(Ipv4Addr::new(198, 51, 100, 3))))
    );
    assert_eq!(first.queries_received(), 1);
    assert_eq!(second.queries_received(), 1);
    assert_eq!(third.queries_received(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_all_upstreams_silent_yields_servfail() {
    let first = FakeUpstream::silent().await;
    let second = FakeUpstream::silent().await;
    let config = with_nameservers(
        home_config(),
        &[(first.addr(), Protocol::Udp), (second.addr(), Protocol::Udp)],
    );
    let server = TestServer::start(config).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Tcp));

    let response = client.query("example.com.", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::ServFail);
    assert!(response.answers().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_local_names_never_reach_upstream() {
    let upstream = FakeUpstream::answering(Ipv4Addr::new(198, 51, 100, 1)).await;
    let config = with_nameservers(home_config(), &[(upstream.addr(), Protocol::Udp)]);
    let server = TestServer::start(config).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let hit = client.query("web.home.", RecordType::A).await.unwrap();
    let miss = client.query("ghost.home.", RecordType::A).await.unwrap();
    let reverse = client
        .query("7.0.0.10.in-addr.arpa.", RecordType::PTR)
        .await
        .unwrap();

    assert_eq!(hit.answers().len(), 1);
    assert!(miss.answers().is_empty());
    assert!(reverse.answers().is_empty());
    assert_eq!(upstream.queries_received(), 0);

    server.shutdown().await;
}
