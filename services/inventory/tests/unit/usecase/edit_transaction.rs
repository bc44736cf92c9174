use chrono::NaiveDate;

use inventory::api::dto::{TransactionCreateReqDto, TransactionUpdateReqDto};
use inventory::auth::AppAuthSession;
use inventory::model::TransactionType;
use inventory::usecase::{EditTransactionUcError, EditTransactionUseCase};

use crate::{ut_backend_context, ut_routes, ut_spawn_responder, ut_txn_json};

fn ut_create_req(quantity: u32) -> TransactionCreateReqDto {
    TransactionCreateReqDto {
        product: "iPad Air".to_string(),
        sku: "SKU-2002".to_string(),
        quantity,
        location: "Storage 1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: None,
        reference: None,
    }
}

#[tokio::test]
async fn create_inbound_ok() {
    let saved = ut_txn_json("TXN-00101", "INBOUND", 8);
    let routes = ut_routes([("POST /api/inbound/transactions", 201, saved.as_str())]);
    let (port, recorder) = ut_spawn_responder(routes).await;
    let session = AppAuthSession::new("tok-1".to_string(), None);
    let uc = EditTransactionUseCase {
        backend: ut_backend_context(port),
        session: Some(&session),
    };
    let m = uc
        .create(TransactionType::Inbound, ut_create_req(8))
        .await
        .unwrap();
    assert_eq!(m.id.as_str(), "TXN-00101");
    assert_eq!(m.type_, TransactionType::Inbound);
    let reqs = recorder.lock().unwrap().clone();
    assert_eq!(
        reqs[0].headers.get("authorization").map(String::as_str),
        Some("Bearer tok-1")
    );
}

#[tokio::test]
async fn zero_quantity_never_sent() {
    let (port, recorder) = ut_spawn_responder(ut_routes([])).await;
    let uc = EditTransactionUseCase {
        backend: ut_backend_context(port),
        session: None,
    };
    let result = uc.create(TransactionType::Outbound, ut_create_req(0)).await;
    assert!(matches!(result, Err(EditTransactionUcError::InvalidQuantity)));
    let upd = TransactionUpdateReqDto {
        quantity: Some(0),
        ..Default::default()
    };
    let result = uc.update(TransactionType::Outbound, "TXN-1", upd).await;
    assert!(matches!(result, Err(EditTransactionUcError::InvalidQuantity)));
    assert!(recorder.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_with_corrupted_reply() {
    let corrupted = ut_txn_json("TXN-00102", "OUTBOUND", -1);
    let routes = ut_routes([
        ("PUT /api/outbound/transactions/TXN-00102", 200, corrupted.as_str()),
        ("PUT /api/outbound/transactions/TXN-00103", 404, "{}"),
    ]);
    let (port, _recorder) = ut_spawn_responder(routes).await;
    let uc = EditTransactionUseCase {
        backend: ut_backend_context(port),
        session: None,
    };
    let upd = TransactionUpdateReqDto {
        location: Some("Warehouse B".to_string()),
        ..Default::default()
    };
    let result = uc
        .update(TransactionType::Outbound, "TXN-00102", upd.clone())
        .await;
    assert!(matches!(result, Err(EditTransactionUcError::CorruptedReply(_))));
    let result = uc.update(TransactionType::Outbound, "TXN-00103", upd).await;
    if let Err(EditTransactionUcError::Backend(e)) = result {
        assert_eq!(e.status(), Some(404));
    } else {
        panic!("expect backend error");
    }
}
