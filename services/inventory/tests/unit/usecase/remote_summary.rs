use inventory::usecase::{RemoteSummaryUcError, RemoteSummaryUseCase};

use crate::{ut_backend_context, ut_routes, ut_spawn_responder, ut_txn_json};

const STOCK_BODY: &str = r#"[
    {"product":"iPad Air","sku":"SKU-2002","quantity":42,"location":"Storage 1"},
    {"product":"USB-C Cable","sku":"SKU-3003","quantity":3},
    {"product":"Logitech Mouse","sku":"SKU-5005","quantity":9}
]"#;

#[tokio::test]
async fn combined_fetch_and_metrics() {
    let inbound = format!("[{}]", ut_txn_json("IN-1", "INBOUND", 10));
    let outbound = format!(
        "[{},{}]",
        ut_txn_json("OUT-1", "OUTBOUND", 2),
        ut_txn_json("OUT-2", "OUTBOUND", 1)
    );
    let routes = ut_routes([
        ("GET /api/inbound/transactions?limit=100", 200, inbound.as_str()),
        ("GET /api/outbound/transactions?limit=100", 200, outbound.as_str()),
        ("GET /api/master/products", 200, r#"[{"id":"P1","name":"iPad Air"}]"#),
        ("GET /api/inventory/stock", 200, STOCK_BODY),
    ]);
    let (port, recorder) = ut_spawn_responder(routes).await;
    let uc = RemoteSummaryUseCase {
        backend: ut_backend_context(port),
        list_limit: 100,
        low_stock_threshold: 10,
        session: None,
    };
    let (data, metrics) = uc.execute().await.unwrap();
    assert_eq!(data.inbound.len(), 1);
    assert_eq!(data.outbound.len(), 2);
    assert_eq!(data.products.len(), 1);
    assert_eq!(data.stock.len(), 3);
    assert_eq!(metrics.total_stock, 54);
    assert_eq!(metrics.unique_products, 3);
    assert_eq!(metrics.low_stock_items, 2);
    // metrics come from the stock listing of the batch
    let reqs = recorder.lock().unwrap().clone();
    assert_eq!(reqs.len(), 4);
    let num_stock_req = reqs
        .iter()
        .filter(|r| r.path.starts_with("/api/inventory/stock"))
        .count();
    assert_eq!(num_stock_req, 1);
}

#[tokio::test]
async fn failing_member_fails_batch() {
    let routes = ut_routes([
        ("GET /api/inbound/transactions?limit=50", 200, "[]"),
        ("GET /api/outbound/transactions?limit=50", 200, "[]"),
        ("GET /api/master/products", 500, "{}"),
        ("GET /api/inventory/stock", 200, STOCK_BODY),
    ]);
    let (port, _recorder) = ut_spawn_responder(routes).await;
    let uc = RemoteSummaryUseCase {
        backend: ut_backend_context(port),
        list_limit: 50,
        low_stock_threshold: 10,
        session: None,
    };
    let result = uc.dashboard_data().await;
    match result {
        Err(RemoteSummaryUcError::Backend(e)) => {
            assert_eq!(e.status(), Some(500));
            assert_eq!(e.path.as_str(), "/api/master/products");
        }
        Ok(_) => panic!("batch should fail"),
    }
    // metrics only depend on the stock listing
    let metrics = uc.stock_metrics().await.unwrap();
    assert_eq!(metrics.low_stock_items, 2);
}
