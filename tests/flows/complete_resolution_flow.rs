//! Static config → zone → listener → wire answers.

#[path = "../common/mod.rs"]
mod common;

use common::{home_config, override_domain, with_extra_domain, TestClient, TestServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, CNAME, PTR};
use hickory_proto::rr::{Name, RData, RecordType};
use home_dns_domain::Protocol;
use std::net::Ipv4Addr;

fn name(value: &str) -> Name {
    Name::from_ascii(value).unwrap()
}

#[tokio::test]
async fn test_static_a_record_over_udp() {
    let server = TestServer::start(home_config()).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("web.home.", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.authoritative());
    assert_eq!(response.answers().len(), 1);
    assert_eq!(response.answers()[0].ttl(), 3600);
    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::A(A(Ipv4Addr::new(192, 168, 1, 50))))
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_derived_ptr_over_tcp() {
    let server = TestServer::start(home_config()).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Tcp));

    let response = client
        .query("50.1.168.192.in-addr.arpa.", RecordType::PTR)
        .await
        .unwrap();

    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::PTR(PTR(name("web.home."))))
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_cname_answered() {
    let server = TestServer::start(home_config()).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("www.home.", RecordType::CNAME).await.unwrap();

    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::CNAME(CNAME(name("web.home."))))
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_case_sensitive_lookup_still_authoritative() {
    let server = TestServer::start(home_config()).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let exact = client.query("NAS.home.", RecordType::A).await.unwrap();
    assert_eq!(exact.answers().len(), 1);

    let folded = client.query("nas.HOME.", RecordType::A).await.unwrap();
    assert_eq!(folded.response_code(), ResponseCode::NoError);
    assert!(folded.authoritative());
    assert!(folded.answers().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_foreign_name_without_upstream_gets_no_answers() {
    let server = TestServer::start(home_config()).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("example.com.", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::Refused);
    assert!(response.answers().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_later_static_domain_wins() {
    let config = with_extra_domain(home_config(), override_domain());
    let server = TestServer::start(config).await.expect("server starts");
    let client = TestClient::new(server.endpoint(Protocol::Udp));

    let response = client.query("web.home.", RecordType::A).await.unwrap();
    assert_eq!(
        response.answers()[0].data(),
        Some(&RData::A(A(Ipv4Addr::new(192, 168, 1, 99))))
    );

    let reverse = client
        .query("99.1.168.192.in-addr.arpa.", RecordType::PTR)
        .await
        .unwrap();
    assert_eq!(reverse.answers().len(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_invalid_static_record_aborts_startup() {
    let broken = serde_json::from_value(serde_json::json!({
        "domain": "home",
        "aRecords": [{ "hostname": "v6", "ip": "fe80::1" }]
    }))
    .unwrap();
    let config = with_extra_domain(home_config(), broken);

    let result = TestServer::start(config).await;

    assert!(result.is_err());
}
