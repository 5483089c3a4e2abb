//! HTTP-level tests for the claims API
//!
//! The router runs against `InMemoryClaimsPort`, so these tests need neither
//! a database nor Docker.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{Claim, ClaimDraft, ClaimsPort, InMemoryClaimsPort};
use interface_api::create_router;
use interface_api::dto::claims::ClaimResponse;
use test_utils::{ClaimFixtures, ClaimPayloadBuilder, PayloadFixtures, MISSING_CLAIM_ID};

fn server_with(port: impl ClaimsPort) -> TestServer {
    TestServer::new(create_router(Arc::new(port))).expect("Failed to start test server")
}

fn server() -> TestServer {
    server_with(InMemoryClaimsPort::new())
}

async fn create(server: &TestServer, body: Value) -> ClaimResponse {
    let response = server.post("/claims").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<ClaimResponse>()
}

fn failed_fields(body: &Value) -> Vec<String> {
    body["detail"]
        .as_array()
        .expect("detail should list violations")
        .iter()
        .map(|v| v["field"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_claim_returns_full_record() {
    let server = server();

    let response = server.post("/claims").json(&PayloadFixtures::john_doe()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["claimant_name"], "John Doe");
    assert_eq!(body["amount"], 1000.0);
    assert_eq!(body["status"], "pending");
    assert!(body["submitted_at"].is_string());
}

#[tokio::test]
async fn test_create_claim_missing_amount_is_unprocessable() {
    let server = server();

    let response = server.post("/claims").json(&PayloadFixtures::missing_amount()).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&response.json::<Value>()), vec!["amount"]);
    assert!(server.get("/claims").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_create_claim_reports_every_invalid_field() {
    let server = server();

    let response = server.post("/claims").json(&PayloadFixtures::all_fields_invalid()).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        failed_fields(&response.json::<Value>()),
        vec!["amount", "claimant_name", "status"]
    );
}

#[tokio::test]
async fn test_status_is_case_sensitive() {
    let server = server();
    let body = ClaimPayloadBuilder::new().set("status", "Pending").build();

    let response = server.post("/claims").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&response.json::<Value>()), vec!["status"]);
}

#[tokio::test]
async fn test_zero_amount_is_rejected() {
    let server = server();
    let body = ClaimPayloadBuilder::new().set("amount", 0).build();

    let response = server.post("/claims").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_field_type_is_listed_with_other_violations() {
    let server = server();
    let body = json!({"claimant_name": "   ", "amount": "abc", "status": "denied"});

    let response = server.post("/claims").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(failed_fields(&body), vec!["amount", "claimant_name", "status"]);
    assert_eq!(body["detail"][0]["code"], "type");
}

#[tokio::test]
async fn test_non_object_body_has_string_detail() {
    let server = server();

    let response = server.post("/claims").json(&json!([])).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].is_string());
}

#[tokio::test]
async fn test_non_json_body_is_unprocessable() {
    let server = server();

    let response = server.post("/claims").text("claimant_name=John").await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_created_ids_are_distinct() {
    let server = server();

    let first = create(&server, PayloadFixtures::john_doe()).await;
    let second = create(&server, PayloadFixtures::john_doe()).await;

    assert_ne!(first.id, second.id);
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_claim_round_trips_created_record() {
    let server = server();
    let created = create(&server, PayloadFixtures::john_doe()).await;

    let response = server.get(&format!("/claims/{}", created.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<ClaimResponse>(), created);
}

#[tokio::test]
async fn test_get_missing_claim_is_not_found() {
    let server = server();

    let response = server.get(&format!("/claims/{}", MISSING_CLAIM_ID)).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"detail": "Claim not found"}));
}

#[tokio::test]
async fn test_non_integer_id_is_unprocessable() {
    let server = server();

    let response = server.get("/claims/abc").await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_prefixed_id_is_not_resolved() {
    let server = server();
    let created = create(&server, PayloadFixtures::john_doe()).await;
    assert_eq!(created.id, 1);

    assert_eq!(server.get("/claims/CLM-1").await.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        server.put("/claims/CLM-1").json(&PayloadFixtures::john_doe()).await.status_code(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(server.delete("/claims/CLM-1").await.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(server.get("/claims/1").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_claims_starts_empty_and_has_no_duplicates() {
    let server = server();
    assert!(server.get("/claims").await.json::<Vec<ClaimResponse>>().is_empty());

    let a = create(&server, PayloadFixtures::john_doe()).await;
    let b = create(&server, PayloadFixtures::updated_user()).await;

    let response = server.get("/claims").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<ClaimResponse>>(), vec![a, b]);
}

#[tokio::test]
async fn test_list_reflects_preloaded_claims() {
    let port = InMemoryClaimsPort::with_drafts(vec![
        ClaimFixtures::john_doe(),
        ClaimFixtures::test_user(),
    ])
    .await;
    let server = server_with(port);

    let listed = server.get("/claims").await.json::<Vec<ClaimResponse>>();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].claimant_name, "Test User");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_identity() {
    let server = server();
    let created = create(&server, PayloadFixtures::john_doe()).await;

    let response = server
        .put(&format!("/claims/{}", created.id))
        .json(&PayloadFixtures::updated_user())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<ClaimResponse>();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.submitted_at, created.submitted_at);
    assert_eq!(updated.claimant_name, "Updated User");
    assert_eq!(updated.amount, 888.88);
    assert_eq!(updated.status.as_str(), "approved");

    let fetched = server.get(&format!("/claims/{}", created.id)).await.json::<ClaimResponse>();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_claim_is_not_found() {
    let server = server();

    let response = server
        .put(&format!("/claims/{}", MISSING_CLAIM_ID))
        .json(&PayloadFixtures::updated_user())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["detail"], "Claim not found");
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let server = server();

    let response = server
        .put(&format!("/claims/{}", MISSING_CLAIM_ID))
        .json(&PayloadFixtures::unknown_status())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        failed_fields(&response.json::<Value>()),
        vec!["amount", "status"]
    );
}

#[tokio::test]
async fn test_invalid_update_leaves_claim_unchanged() {
    let server = server();
    let created = create(&server, PayloadFixtures::john_doe()).await;

    let response = server
        .put(&format!("/claims/{}", created.id))
        .json(&PayloadFixtures::all_fields_invalid())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let fetched = server.get(&format!("/claims/{}", created.id)).await.json::<ClaimResponse>();
    assert_eq!(fetched, created);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_claim_then_get_is_not_found() {
    let server = server();
    let created = create(&server, PayloadFixtures::john_doe()).await;
    let path = format!("/claims/{}", created.id);

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    assert_eq!(server.get(&path).await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(server.delete(&path).await.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_claim_is_not_found() {
    let server = server();

    let response = server.delete(&format!("/claims/{}", MISSING_CLAIM_ID)).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"detail": "Claim not found"}));
}

// ============================================================================
// Health and storage failures
// ============================================================================

/// Port whose storage is permanently unreachable
struct UnreachablePort;

impl DomainPort for UnreachablePort {}

#[async_trait]
impl HealthCheckable for UnreachablePort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::unhealthy("unreachable", 0, "connection refused")
    }
}

#[async_trait]
impl ClaimsPort for UnreachablePort {
    async fn create_claim(&self, _draft: ClaimDraft) -> Result<Claim, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn get_claim(&self, _id: ClaimId) -> Result<Claim, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn update_claim(&self, _id: ClaimId, _draft: ClaimDraft) -> Result<Claim, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn delete_claim(&self, _id: ClaimId) -> Result<Claim, PortError> {
        Err(PortError::connection("connection refused"))
    }
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.json::<Value>()["status"], "healthy");

    let ready = server.get("/health/ready").await;
    assert_eq!(ready.status_code(), StatusCode::OK);
    assert_eq!(ready.json::<Value>()["status"], "ready");
}

#[tokio::test]
async fn test_unreachable_storage() {
    let server = server_with(UnreachablePort);

    let ready = server.get("/health/ready").await;
    assert_eq!(ready.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let list = server.get("/claims").await;
    assert_eq!(list.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(list.json::<Value>()["detail"], "Service unavailable");

    let invalid = server.post("/claims").json(&PayloadFixtures::missing_amount()).await;
    assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = server();

    let response = server.get("/health").await;

    assert!(!response.header("x-request-id").is_empty());
}
