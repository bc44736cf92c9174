use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use inventory::adapter::datasource::{
    AbstractTransactionSource, BackendTransactionSource, FixtureTransactionSource,
    MockTransactionSource,
};
use inventory::auth::AppAuthSession;
use inventory::constant::mock_data;
use inventory::error::AppErrorCode;
use inventory::model::TransactionType;

use crate::{
    ut_backend_context, ut_example_fullpath, ut_routes, ut_setup_sharestate, ut_spawn_responder,
    ut_txn_json,
};

#[tokio::test]
async fn mock_seeded_deterministic() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let src1 = MockTransactionSource::new(80, Some(12345), today);
    let src2 = MockTransactionSource::new(80, Some(12345), today);
    let txns1 = src1.fetch().await.unwrap();
    let txns2 = src2.fetch().await.unwrap();
    assert_eq!(txns1.len(), 80);
    assert_eq!(txns1, txns2);
    let other = MockTransactionSource::new(80, Some(54321), today).generate();
    assert_ne!(txns1, other);
}

#[test]
fn mock_fields_within_range() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let earliest = today - Duration::days(mock_data::NUM_DAYS_HISTORY);
    let txns = MockTransactionSource::new(500, Some(7), today).generate();
    assert_eq!(txns[0].id.as_str(), "TXN-00001");
    assert_eq!(txns[499].id.as_str(), "TXN-00500");
    txns.iter()
        .map(|t| {
            assert!(mock_data::PRODUCTS.contains(&t.product.as_str()));
            assert!(mock_data::LOCATIONS.contains(&t.location.as_str()));
            assert!(t.quantity >= 1 && t.quantity <= mock_data::MAX_QUANTITY);
            assert!(t.date <= today && t.date > earliest);
            let sku_serial = t.sku.strip_prefix("SKU-").unwrap().parse::<u32>().unwrap();
            assert!(sku_serial < mock_data::MAX_SKU_SERIAL);
            let ref_serial = t
                .reference
                .strip_prefix("REF-")
                .unwrap()
                .parse::<u32>()
                .unwrap();
            assert!(ref_serial < mock_data::MAX_REF_SERIAL);
        })
        .count();
    let num_inbound = txns
        .iter()
        .filter(|t| t.type_ == TransactionType::Inbound)
        .count();
    assert!(num_inbound > 0 && num_inbound < 500);
}

#[test]
fn mock_unseeded_count() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let txns = MockTransactionSource::new(3, None, today).generate();
    assert_eq!(txns.len(), 3);
    let txns = MockTransactionSource::new(0, None, today).generate();
    assert!(txns.is_empty());
}

#[tokio::test]
async fn fixture_load_ok() {
    let shr_state = ut_setup_sharestate("config_fixture.json");
    let path = ut_example_fullpath("transactions.json");
    let src = FixtureTransactionSource::new(path, shr_state.log_context());
    let txns = src.fetch().await.unwrap();
    assert_eq!(txns.len(), 8);
    assert_eq!(txns[0].id.as_str(), "TXN-00001");
    assert_eq!(txns[7].id.as_str(), "TXN-00008");
    assert!(txns[7].reference.is_empty());
    assert_eq!(src.label(), "fixture");
}

#[tokio::test]
async fn fixture_reject_zero_quantity() {
    let shr_state = ut_setup_sharestate("config_fixture.json");
    let path = ut_example_fullpath("transactions_zero_qty.json");
    let src = FixtureTransactionSource::new(path, shr_state.log_context());
    let e = src.fetch().await.unwrap_err();
    assert_eq!(e.code, AppErrorCode::InvalidInput);
}

#[tokio::test]
async fn fixture_missing_file() {
    let shr_state = ut_setup_sharestate("config_fixture.json");
    let path = ut_example_fullpath("nonexist.json");
    let src = FixtureTransactionSource::new(path, shr_state.log_context());
    let e = src.fetch().await.unwrap_err();
    assert_eq!(e.code, AppErrorCode::IOerror(std::io::ErrorKind::NotFound));
}

#[tokio::test]
async fn source_selected_by_config() {
    let shr_state = ut_setup_sharestate("config_fixture.json");
    let src = shr_state.transaction_source(None);
    assert_eq!(src.label(), "fixture");
    let txns = src.fetch().await.unwrap();
    assert_eq!(txns.len(), 8);

    let shr_state = ut_setup_sharestate("config_mock.json");
    let src = shr_state.transaction_source(None);
    assert_eq!(src.label(), "mock");
    let txns = src.fetch().await.unwrap();
    assert_eq!(txns.len(), 50);

    let shr_state = ut_setup_sharestate("config_backend.json");
    let src = shr_state.transaction_source(None);
    assert_eq!(src.label(), "backend");
}

#[tokio::test]
async fn backend_inbound_then_outbound() {
    let inbound = format!(
        "[{},{}]",
        ut_txn_json("IN-1", "INBOUND", 10),
        ut_txn_json("IN-2", "INBOUND", 3)
    );
    let outbound = format!("[{}]", ut_txn_json("OUT-1", "OUTBOUND", 4));
    let routes = ut_routes([
        ("GET /api/inbound/transactions?limit=100", 200, inbound.as_str()),
        ("GET /api/outbound/transactions?limit=100", 200, outbound.as_str()),
    ]);
    let (port, recorder) = ut_spawn_responder(routes).await;
    let backend = ut_backend_context(port);
    let session = AppAuthSession::new("tok-9".to_string(), None);
    let src = BackendTransactionSource::new(backend, 100, Some(&session));
    let txns = src.fetch().await.unwrap();
    let ids = txns.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["IN-1", "IN-2", "OUT-1"]);
    let reqs = recorder.lock().unwrap().clone();
    assert_eq!(reqs.len(), 2);
    assert!(reqs
        .iter()
        .all(|r| r.headers.get("authorization").map(String::as_str) == Some("Bearer tok-9")));
}

#[tokio::test]
async fn backend_member_failure_fails_fetch() {
    let routes = ut_routes([
        ("GET /api/inbound/transactions?limit=20", 200, "[]"),
        ("GET /api/outbound/transactions?limit=20", 500, "{}"),
    ]);
    let (port, _recorder) = ut_spawn_responder(routes).await;
    let backend = ut_backend_context(port);
    let src = BackendTransactionSource::new(Arc::clone(&backend), 20, None);
    let e = src.fetch().await.unwrap_err();
    assert_eq!(e.code, AppErrorCode::RemoteRequestFailure);
    assert!(e.detail.unwrap().contains("500"));
}
