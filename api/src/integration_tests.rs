//! Router-level tests for the waitlist API
//!
//! These drive the real axum router with in-memory adapters:
//! 1. Preflight and health probes
//! 2. Validation failures (no store write)
//! 3. Store failures (no email attempt)
//! 4. Email failures (still a success response)

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::{AirtableLeadStore, ResendNotifier};
    use crate::app::LeadService;
    use crate::test_utils::{
        scripted_upstream, test_notification_settings, InMemoryLeadStore, MockNotifier,
    };
    use crate::{router, AppState};

    fn app(store: Arc<InMemoryLeadStore>, notifier: Arc<MockNotifier>) -> axum::Router {
        let lead_service = Arc::new(LeadService::new(
            store,
            notifier,
            test_notification_settings(),
        ));
        router(AppState { lead_service })
    }

    fn post_lead(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/submit-lead")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn acme() -> Value {
        json!({
            "businessName": "Acme Co",
            "phoneNumber": "+15551234567",
            "email": "",
            "website": "",
            "messagingPlatform": "WhatsApp",
            "businessSector": "Retail"
        })
    }

    #[tokio::test]
    async fn acme_submission_end_to_end() {
        let store = Arc::new(InMemoryLeadStore::new());
        let notifier = Arc::new(MockNotifier::new());

        let response = app(store.clone(), notifier.clone())
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(body, json!({"success": true, "id": records[0].id.0.clone()}));

        let lead = &records[0].lead;
        assert_eq!(lead.business_name(), "Acme Co");
        assert_eq!(lead.phone_number(), "+15551234567");
        assert_eq!(lead.email(), "");
        assert_eq!(lead.website(), "");
        assert_eq!(lead.messaging_platform(), "WhatsApp");
        assert_eq!(lead.business_sector(), "Retail");

        let sent = notifier.attempts();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "notifications@yourcompany.com");
    }

    #[tokio::test]
    async fn blank_required_fields_return_400_without_store_write() {
        let cases = [
            json!({"businessName": "", "phoneNumber": "+1555"}),
            json!({"businessName": "Acme Co", "phoneNumber": "   "}),
            json!({"phoneNumber": "+1555"}),
            json!({"businessName": "Acme Co", "phoneNumber": null}),
            json!({}),
        ];

        for case in cases {
            let store = Arc::new(InMemoryLeadStore::new());
            let notifier = Arc::new(MockNotifier::new());

            let response = app(store.clone(), notifier.clone())
                .oneshot(post_lead(case.clone()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "case {}", case);
            let body = read_json(response).await;
            assert_eq!(
                body,
                json!({"error": "Business name and phone number are required"})
            );
            assert_eq!(store.count(), 0);
            assert!(notifier.attempts().is_empty());
        }
    }

    #[tokio::test]
    async fn store_failure_returns_500_without_email() {
        let notifier = Arc::new(MockNotifier::new());

        let response = app(Arc::new(InMemoryLeadStore::failing()), notifier.clone())
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Airtable submission failed"));
        assert!(notifier.attempts().is_empty());
    }

    #[tokio::test]
    async fn email_failure_still_returns_record_id() {
        let store = Arc::new(InMemoryLeadStore::new());
        let notifier = Arc::new(MockNotifier::failing());

        let response = app(store.clone(), notifier.clone())
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["id"], store.records()[0].id.0.as_str());
        assert_eq!(notifier.attempts().len(), 1);
    }

    #[tokio::test]
    async fn repeated_submission_creates_two_records() {
        let store = Arc::new(InMemoryLeadStore::new());
        let service = app(store.clone(), Arc::new(MockNotifier::new()));

        let first = read_json(service.clone().oneshot(post_lead(acme())).await.unwrap()).await;
        let second = read_json(service.oneshot(post_lead(acme())).await.unwrap()).await;

        assert_eq!(store.count(), 2);
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn malformed_json_returns_500_with_message() {
        let store = Arc::new(InMemoryLeadStore::new());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/submit-lead")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let response = app(store.clone(), Arc::new(MockNotifier::new()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid lead payload"));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn preflight_gets_permissive_cors_and_no_body() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/submit-lead")
            .header("origin", "https://waitlist.example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app(
            Arc::new(InMemoryLeadStore::new()),
            Arc::new(MockNotifier::new()),
        )
        .oneshot(request)
        .await
        .unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        let allowed = headers["access-control-allow-headers"].to_str().unwrap();
        assert!(allowed.contains("content-type"));
        assert!(allowed.contains("apikey"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn error_responses_carry_cors_headers() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/submit-lead")
            .header("origin", "https://waitlist.example.com")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app(
            Arc::new(InMemoryLeadStore::new()),
            Arc::new(MockNotifier::new()),
        )
        .oneshot(request)
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app(
            Arc::new(InMemoryLeadStore::new()),
            Arc::new(MockNotifier::new()),
        )
        .oneshot(request)
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    /// Production adapters without credentials: the store call fails, so the
    /// request is a 500 and no email is attempted.
    #[tokio::test]
    async fn unconfigured_store_fails_submission() {
        let lead_service = Arc::new(LeadService::new(
            Arc::new(AirtableLeadStore::new(
                "http://127.0.0.1:9".to_string(),
                None,
                None,
                "Leads".to_string(),
            )),
            Arc::new(ResendNotifier::new("http://127.0.0.1:9".to_string(), None)),
            test_notification_settings(),
        ));

        let response = router(AppState { lead_service })
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("AIRTABLE_API_KEY"));
    }

    /// A missing email credential is swallowed like any other send failure.
    #[tokio::test]
    async fn unconfigured_notifier_still_succeeds() {
        let store = Arc::new(InMemoryLeadStore::new());
        let lead_service = Arc::new(LeadService::new(
            store.clone(),
            Arc::new(ResendNotifier::new("http://127.0.0.1:9".to_string(), None)),
            test_notification_settings(),
        ));

        let response = router(AppState { lead_service })
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.count(), 1);
    }

    /// Airtable rejects the write: 500 with the upstream message, no email.
    #[tokio::test]
    async fn rejected_store_write_returns_500_without_email() {
        let airtable = scripted_upstream(422, "INVALID_VALUE_FOR_COLUMN").await;
        let notifier = Arc::new(MockNotifier::new());
        let lead_service = Arc::new(LeadService::new(
            Arc::new(AirtableLeadStore::new(
                airtable,
                Some("key".to_string()),
                Some("appXYZ".to_string()),
                "Leads".to_string(),
            )),
            notifier.clone(),
            test_notification_settings(),
        ));

        let response = router(AppState { lead_service })
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Airtable submission failed"));
        assert!(error.contains("INVALID_VALUE_FOR_COLUMN"));
        assert!(notifier.attempts().is_empty());
    }

    /// Resend rejects the email after a real store write: still 200.
    #[tokio::test]
    async fn rejected_email_still_returns_record_id() {
        let airtable = scripted_upstream(200, r#"{"records":[{"id":"recLive1"}]}"#).await;
        let resend = scripted_upstream(500, "upstream down").await;
        let lead_service = Arc::new(LeadService::new(
            Arc::new(AirtableLeadStore::new(
                airtable,
                Some("key".to_string()),
                Some("appXYZ".to_string()),
                "Leads".to_string(),
            )),
            Arc::new(ResendNotifier::new(resend, Some("re_test".to_string()))),
            test_notification_settings(),
        ));

        let response = router(AppState { lead_service })
            .oneshot(post_lead(acme()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"success": true, "id": "recLive1"})
        );
    }
}
