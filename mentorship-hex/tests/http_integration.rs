//! Integration tests for the HTTP surface.
//!
//! Drives the full router with a real in-memory SQLite repository and a
//! recording payout client, verifying the webhook contract end to end:
//! intake error collapsing, soft-miss 400s, the fixed payout, and the
//! admin gate.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mentorship_hex::{MeetingService, inbound::HttpServer};
use mentorship_repo::SqliteRepo;
use mentorship_types::{
    BankTransfer, MatchId, PaymentAccountId, PayoutClient, PayoutLink, PhoneNumber,
    ProviderError, RoleChecker,
};

/// Recording payout client; never talks to a network.
#[derive(Clone, Default)]
struct RecordingPayouts {
    transfers: Arc<Mutex<Vec<(String, i64)>>>,
}

#[async_trait]
impl PayoutClient for RecordingPayouts {
    async fn send_bank_transfer(
        &self,
        recipient: &PaymentAccountId,
        amount: i64,
    ) -> Result<BankTransfer, ProviderError> {
        self.transfers
            .lock()
            .unwrap()
            .push((recipient.as_str().to_string(), amount));
        Ok(BankTransfer {
            id: "tr_test".into(),
            status: "sent".into(),
            amount,
            recipient_id: recipient.as_str().into(),
        })
    }

    async fn send_payout_link(
        &self,
        amount: i64,
        payee: &PhoneNumber,
    ) -> Result<PayoutLink, ProviderError> {
        Ok(PayoutLink {
            id: "po_test".into(),
            created: "2024-01-01T00:00:00Z".into(),
            link: "https://pay.example.com/po_test".into(),
            amount,
            status: "created".into(),
            payee: mentorship_types::domain::Payee {
                first_name: None,
                last_name: None,
                email: None,
                country_code: payee.country_code.clone(),
                phone_number: payee.phone_number.clone(),
            },
            delivery: None,
            tax_exempt: true,
            claimed_user_id: None,
            flow_id: None,
            metadata: None,
        })
    }
}

/// Role checker with a fixed admin list.
struct StaticRoles {
    admins: Vec<String>,
}

impl RoleChecker for StaticRoles {
    fn is_in_role(&self, identity: &str, role: &str) -> bool {
        role == "admin" && self.admins.iter().any(|a| a == identity)
    }
}

struct TestApp {
    router: axum::Router,
    payouts: RecordingPayouts,
    match_id: MatchId,
}

/// Seeds one mentor (with a payment account) and one match.
async fn create_test_app(with_account: bool) -> TestApp {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let account = PaymentAccountId::new("acct_test");
    let mentor = repo
        .create_mentor("Ada", with_account.then_some(&account))
        .await
        .unwrap();
    let match_id = repo.create_match(mentor, "Grace").await.unwrap();

    let payouts = RecordingPayouts::default();
    let service = MeetingService::new(repo, payouts.clone());
    let roles = Arc::new(StaticRoles {
        admins: vec!["alex".to_string()],
    });
    let server = HttpServer::new(service, roles);

    TestApp {
        router: server.router(),
        payouts,
        match_id,
    }
}

fn meeting_body(match_id: i64) -> String {
    serde_json::json!({
        "eventId": "evt_1",
        "eventType": "FORM_RESPONSE",
        "createdAt": "2024-01-01T00:00:00Z",
        "data": {
            "responseId": "resp_1",
            "submissionId": "sub_1",
            "respondentId": "user_1",
            "formId": "form_1",
            "formName": "Meeting report",
            "createdAt": "2024-01-01T00:00:00Z",
            "fields": [
                {"key": "q1", "label": "matchId", "type": "HIDDEN_FIELDS", "value": match_id.to_string()},
                {"key": "q2", "label": "estimatedTime", "type": "INPUT_NUMBER", "value": 30},
                {"key": "q3", "label": "meetingNotes", "type": "TEXTAREA", "value": "Great session"}
            ]
        }
    })
    .to_string()
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_meeting_webhook_success() {
    let app = create_test_app(true).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/meetings",
            meeting_body(app.match_id.as_i64()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "awesome sauce");
    assert!(json["data"].is_null());

    let transfers = app.payouts.transfers.lock().unwrap();
    assert_eq!(transfers.as_slice(), &[("acct_test".to_string(), 25)]);
}

#[tokio::test]
async fn test_meeting_webhook_unknown_match_returns_400() {
    let app = create_test_app(true).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json("/meetings", meeting_body(9999)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "mentorId not found");
    assert!(app.payouts.transfers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_meeting_webhook_mentor_without_account_returns_400() {
    let app = create_test_app(false).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/meetings",
            meeting_body(app.match_id.as_i64()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.payouts.transfers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_meeting_webhook_garbage_body_returns_500() {
    let app = create_test_app(true).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json("/meetings", "not json at all".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal Server Error");
}

#[tokio::test]
async fn test_meeting_webhook_missing_fields_returns_500() {
    let app = create_test_app(true).await;

    let body = serde_json::json!({
        "eventId": "evt_1",
        "eventType": "FORM_RESPONSE",
        "createdAt": "2024-01-01T00:00:00Z",
        "data": {
            "responseId": "resp_1",
            "submissionId": "sub_1",
            "respondentId": "user_1",
            "formId": "form_1",
            "formName": "Meeting report",
            "createdAt": "2024-01-01T00:00:00Z",
            "fields": [
                {"key": "q2", "label": "estimatedTime", "type": "INPUT_NUMBER", "value": 30}
            ]
        }
    })
    .to_string();

    let response = app
        .router
        .clone()
        .oneshot(post_json("/meetings", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.payouts.transfers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_payout_returns_link_object() {
    let app = create_test_app(true).await;

    let body = serde_json::json!({
        "amount": 10,
        "phoneNumber": { "country_code": "1", "phone_number": "5551234567" }
    })
    .to_string();

    let response = app
        .router
        .clone()
        .oneshot(post_json("/dots/sendPayout", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["amount"], 10);
    assert!(json["link"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_send_payout_missing_fields_returns_500() {
    let app = create_test_app(true).await;

    let response = app
        .router
        .clone()
        .oneshot(post_json("/dots/sendPayout", r#"{"amount": 10}"#.into()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_admin_dashboard_redirects_non_admins() {
    let app = create_test_app(true).await;

    let request = Request::builder()
        .uri("/admin/dashboard")
        .header("x-identity", "mallory")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn test_admin_dashboard_redirects_anonymous_callers() {
    let app = create_test_app(true).await;

    let request = Request::builder()
        .uri("/admin/dashboard")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_admin_dashboard_allows_admins() {
    let app = create_test_app(true).await;

    let request = Request::builder()
        .uri("/admin/dashboard")
        .header("x-identity", "alex")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app(true).await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_webhooks_for_different_matches() {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let account_a = PaymentAccountId::new("acct_a");
    let account_b = PaymentAccountId::new("acct_b");
    let mentor_a = repo.create_mentor("Ada", Some(&account_a)).await.unwrap();
    let mentor_b = repo.create_mentor("Alan", Some(&account_b)).await.unwrap();
    let match_a = repo.create_match(mentor_a, "Grace").await.unwrap();
    let match_b = repo.create_match(mentor_b, "Edsger").await.unwrap();

    let payouts = RecordingPayouts::default();
    let service = MeetingService::new(repo, payouts.clone());
    let roles = Arc::new(StaticRoles { admins: vec![] });
    let router = HttpServer::new(service, roles).router();

    let (ra, rb) = tokio::join!(
        router
            .clone()
            .oneshot(post_json("/meetings", meeting_body(match_a.as_i64()))),
        router
            .clone()
            .oneshot(post_json("/meetings", meeting_body(match_b.as_i64()))),
    );

    assert_eq!(ra.unwrap().status(), StatusCode::OK);
    assert_eq!(rb.unwrap().status(), StatusCode::OK);

    let mut transfers = app_transfers(&payouts);
    transfers.sort();
    assert_eq!(
        transfers,
        vec![("acct_a".to_string(), 25), ("acct_b".to_string(), 25)]
    );
}

fn app_transfers(payouts: &RecordingPayouts) -> Vec<(String, i64)> {
    payouts.transfers.lock().unwrap().clone()
}
