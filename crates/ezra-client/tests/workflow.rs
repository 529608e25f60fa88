// ============================================================================
// EZRA Client - Lease Workflow Integration Tests
// File: crates/ezra-client/tests/workflow.rs
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ezra_client::{ApiError, LeaseClient, OpKind, OpState, StaticTokenProvider, WriteOutcome};
use ezra_core::{Apartment, CreateLeasePayload, LeaseStatus, RenewLeasePayload, RentAmount};

fn client(server: &MockServer) -> LeaseClient {
    LeaseClient::new(server.uri(), Arc::new(StaticTokenProvider::new("test-token")))
}

fn apartment() -> Apartment {
    Apartment {
        id: 7,
        unit_number: "204".to_string(),
        price: RentAmount::from_major(1850),
        size_sq_ft: 760,
        availability: true,
        management_id: 1,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn receipt_json(lease_id: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "lease_id": lease_id,
        "lease_number": 1,
        "status": status,
        "sign_url": "https://sign.example.com/doc/abc",
        "external_doc_id": "doc-abc"
    })
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_json(1, "draft")))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    // End date on the start date: term is empty, must be refused locally.
    let payload = CreateLeasePayload::new(
        4,
        &apartment(),
        "Dana Fox",
        "dana@example.com",
        RentAmount::from_minor(150_000),
        date(2026, 9, 1),
        date(2026, 9, 1),
    );
    let err = client.create_lease(payload).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(matches!(client.op_state(OpKind::Create), OpState::Failed(_)));
}

#[tokio::test]
async fn test_duplicate_submission_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/send/9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(receipt_json(9, "pending_approval"))
                .set_delay(Duration::from_millis(250)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(client(&server));
    let first = {
        let client = client.clone();
        tokio::spawn(async move { client.send_lease(9, LeaseStatus::Draft, 4).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // While the first request is in flight the second is refused up front.
    let err = client.send_lease(9, LeaseStatus::Draft, 4).await.unwrap_err();
    assert!(matches!(err, ApiError::OperationInFlight));
    assert_eq!(client.op_state(OpKind::Send), OpState::Loading);

    let receipt = first.await.unwrap().unwrap();
    assert_eq!(receipt.status, LeaseStatus::PendingApproval);
    assert_eq!(client.op_state(OpKind::Send), OpState::Success);
}

#[tokio::test]
async fn test_conflict_message_surfaces_verbatim() {
    let server = MockServer::start().await;
    let message = "A lease already exists with ID: 42 for this tenant and apartment.";
    Mock::given(method("POST"))
        .and(path("/admin/leases/create"))
        .respond_with(ResponseTemplate::new(409).set_body_string(message))
        .mount(&server)
        .await;

    let client = client(&server);
    let payload = CreateLeasePayload::new(
        4,
        &apartment(),
        "Dana Fox",
        "dana@example.com",
        RentAmount::from_minor(150_000),
        date(2026, 9, 1),
        date(2027, 8, 31),
    );
    let err = client.create_lease(payload).await.unwrap_err();
    match &err {
        ApiError::Conflict(body) => assert_eq!(body, message),
        other => panic!("unexpected error: {other:?}"),
    }
    match client.op_state(OpKind::Create) {
        OpState::Failed(msg) => assert_eq!(msg, message),
        other => panic!("unexpected state: {other:?}"),
    }

    // A reset returns the operation to idle so the admin can retry.
    client.reset_op(OpKind::Create);
    assert_eq!(client.op_state(OpKind::Create), OpState::Idle);
}

#[tokio::test]
async fn test_mutation_invalidates_lease_list_cache() {
    let server = MockServer::start().await;
    let rows = serde_json::json!([{
        "id": 3,
        "tenantId": 4,
        "apartmentId": 7,
        "tenantName": "Dana Fox",
        "apartment": "204",
        "leaseStartDate": "2026-01-01",
        "leaseEndDate": "2026-12-31",
        "rentAmount": 150000,
        "status": "active"
    }]);
    Mock::given(method("GET"))
        .and(path("/admin/leases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/terminate/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_json(3, "terminated")))
        .mount(&server)
        .await;

    let client = client(&server);
    // Two reads, one request: the second is served from cache.
    assert_eq!(client.list_leases().await.unwrap().len(), 1);
    assert_eq!(client.list_leases().await.unwrap().len(), 1);

    client.terminate_lease(3).await.unwrap();

    // The mutation dropped the cached list, so this read refetches.
    assert_eq!(client.list_leases().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_send_refused_for_non_sendable_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/send/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_json(5, "active")))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    for status in [LeaseStatus::Active, LeaseStatus::Expired, LeaseStatus::Terminated] {
        let err = client.send_lease(5, status, 4).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        client.reset_op(OpKind::Send);
    }
}

#[tokio::test]
async fn test_renewal_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/renew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_json(10, "pending_approval")))
        .mount(&server)
        .await;

    let client = client(&server);
    let payload = RenewLeasePayload {
        previous_lease_id: 3,
        tenant_id: 4,
        apartment_id: 7,
        tenant_name: "Dana Fox".to_string(),
        tenant_email: "dana@example.com".to_string(),
        property_address: "204".to_string(),
        rent_amount: RentAmount::from_minor(155_000),
        start_date: date(2027, 1, 1),
        end_date: date(2027, 12, 31),
        document_title: "Lease Agreement for 204".to_string(),
        check_existing: false,
    };
    let receipt = client.renew_lease(payload).await.unwrap();
    assert_eq!(receipt.lease_id, 10);
    assert_eq!(receipt.status, LeaseStatus::PendingApproval);
    assert_eq!(receipt.outcome(), WriteOutcome::Created);
    assert!(receipt.signing_url.is_some());
}

#[tokio::test]
async fn test_create_then_send_reaches_pending_with_signing_link() {
    let server = MockServer::start().await;
    let mut draft = receipt_json(8, "draft");
    draft["sign_url"] = serde_json::Value::Null;
    Mock::given(method("POST"))
        .and(path("/admin/leases/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(draft))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/send/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_json(8, "pending_approval")))
        .mount(&server)
        .await;

    let client = client(&server);
    let payload = CreateLeasePayload::new(
        4,
        &apartment(),
        "Dana Fox",
        "dana@example.com",
        RentAmount::from_minor(150_000),
        date(2026, 9, 1),
        date(2027, 8, 31),
    );
    let created = client.create_lease(payload).await.unwrap();
    assert_eq!(created.status, LeaseStatus::Draft);
    assert!(created.signing_url.is_none());

    let sent = client.send_lease(created.lease_id, created.status, 4).await.unwrap();
    assert_eq!(sent.status, LeaseStatus::PendingApproval);
    assert!(sent.signing_url.is_some());
}

#[tokio::test]
async fn test_lease_detail_decodes_lineage_and_provider_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/leases/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 12,
            "tenant_id": 4,
            "apartment_id": 7,
            "tenant_name": "Dana Fox",
            "tenant_email": "dana@example.com",
            "property_address": "204",
            "rent_amount": 160000,
            "start_date": "2026-09-01",
            "end_date": "2027-08-31",
            "status": "pending_approval",
            "document_title": "Lease Agreement for 204",
            "previous_lease_id": 7,
            "amendment_reason": "Rent adjustment",
            "signing_url": "https://sign.example.com/doc/12",
            "created_at": "2026-08-28T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let lease = client.get_lease(12).await.unwrap();
    assert_eq!(lease.previous_lease_id, Some(7));
    assert!(lease.is_amendment());
    assert_eq!(lease.status, LeaseStatus::PendingApproval);
    assert_eq!(lease.rent_amount, RentAmount::from_minor(160_000));
    assert!(lease.signed_pdf_url.is_none());
}

#[tokio::test]
async fn test_amendment_links_lineage_and_spares_original() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/leases/amend"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "previous_lease_id": 7,
            "is_amendment": true,
            "check_existing": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(receipt_json(12, "pending_approval")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let payload = ezra_core::AmendLeasePayload {
        previous_lease_id: 7,
        tenant_id: 4,
        apartment_id: 7,
        tenant_name: "Dana Fox".to_string(),
        tenant_email: "dana@example.com".to_string(),
        property_address: "204".to_string(),
        rent_amount: RentAmount::from_minor(160_000),
        start_date: date(2026, 9, 1),
        end_date: date(2027, 8, 31),
        document_title: "Lease Agreement for 204".to_string(),
        amendment_reason: "Rent adjustment".to_string(),
        is_amendment: false,
        check_existing: true,
    };
    // validated() pins the amendment flags no matter what the caller set.
    let receipt = client.amend_lease(payload).await.unwrap();
    assert_eq!(receipt.lease_id, 12);
    assert_eq!(receipt.status, LeaseStatus::PendingApproval);
    // No call touches the original lease; only the amend endpoint was hit.
}

#[tokio::test]
async fn test_upsert_receipt_reports_replacement() {
    let server = MockServer::start().await;
    let mut body = receipt_json(6, "draft");
    body["updated"] = serde_json::json!(true);
    Mock::given(method("POST"))
        .and(path("/admin/leases/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client(&server);
    let payload = CreateLeasePayload::new(
        4,
        &apartment(),
        "Dana Fox",
        "dana@example.com",
        RentAmount::from_minor(150_000),
        date(2026, 9, 1),
        date(2027, 8, 31),
    );
    let receipt = client.create_lease(payload).await.unwrap();
    assert_eq!(receipt.outcome(), WriteOutcome::Updated);
}
