//! Acceptor Module Tests
//!
//! ## Test Scopes
//! - **Validator**: the three consistency rules and their corner cases.
//! - **Forwarding**: the learner contract (`/learn` body shape) and best-effort delivery.
//! - **HTTP boundary**: accepted/rejected bodies.

#[cfg(test)]
mod tests {
    use crate::acceptor::protocol::{Submission, SubmissionRequest};
    use crate::acceptor::service::Acceptor;
    use crate::acceptor::validator::validate;
    use crate::error::PipelineError;
    use crate::node::router::acceptor_router;
    use crate::registry::types::{NodeAddr, Topology};
    use crate::test_support::{fast_config, unreachable_url, Recorder};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn request(range: Option<&str>, count: usize, words: &[&str]) -> SubmissionRequest {
        SubmissionRequest {
            letter_range: range.map(str::to_string),
            count,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn with_learner(url: &str) -> Topology {
        Topology {
            learner: Some(NodeAddr::new(url)),
            ..Topology::default()
        }
    }

    // ============================================================
    // VALIDATOR TESTS
    // ============================================================

    #[test]
    fn test_accepts_consistent_submission() {
        let submission = validate(request(Some("A-C"), 2, &["apple", "cat"])).unwrap();

        assert_eq!(
            submission,
            Submission {
                letter_range: "A-C".to_string(),
                count: 2,
                words: vec!["apple".to_string(), "cat".to_string()],
            }
        );
    }

    #[test]
    fn test_rejects_count_mismatch() {
        let err = validate(request(Some("A-C"), 1, &["apple", "cat"])).unwrap_err();
        assert!(matches!(err, PipelineError::ValidationFailed(_)));
    }

    #[test]
    fn test_rejects_word_outside_range() {
        assert!(validate(request(Some("A-C"), 2, &["apple", "dog"])).is_err());
    }

    #[test]
    fn test_range_check_ignores_case() {
        assert!(validate(request(Some("a-c"), 2, &["Apple", "CAT"])).is_ok());
        assert!(validate(request(Some("A-C"), 1, &["cat"])).is_ok());
    }

    #[test]
    fn test_empty_submission_is_valid() {
        assert!(validate(request(Some("N-Z"), 0, &[])).is_ok());
        assert!(validate(request(Some("N-Z"), 1, &[])).is_err());
    }

    #[test]
    fn test_rejects_missing_range() {
        assert!(matches!(
            validate(request(None, 0, &[])),
            Err(PipelineError::InvalidSubmission)
        ));
        assert!(matches!(
            validate(request(Some(""), 0, &[])),
            Err(PipelineError::InvalidSubmission)
        ));
    }

    #[test]
    fn test_rejects_malformed_range() {
        assert!(matches!(
            validate(request(Some("AC"), 0, &[])),
            Err(PipelineError::ValidationFailed(_))
        ));
        assert!(validate(request(Some("A-B-C"), 0, &[])).is_err());
    }

    #[test]
    fn test_rejects_empty_word() {
        assert!(validate(request(Some("A-Z"), 1, &[""])).is_err());
    }

    #[test]
    fn test_request_defaults() {
        let req: SubmissionRequest = serde_json::from_value(json!({"letter_range": "A-M"})).unwrap();
        assert_eq!(req.count, 0);
        assert!(req.words.is_empty());
        assert!(validate(req).is_ok());
    }

    // ============================================================
    // FORWARDING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_valid_submission_forwarded_to_learner() {
        let (learner, learner_url) = Recorder::spawn(StatusCode::OK).await;
        let acceptor = Acceptor::new(fast_config());
        acceptor.replace_topology(with_learner(&learner_url)).await;

        acceptor
            .accept(request(Some("A-M"), 1, &["apple"]))
            .await
            .unwrap();

        assert_eq!(
            learner.hits_on("/learn").await,
            vec![json!({"letter_range": "A-M", "count": 1, "words": ["apple"]})]
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_not_forwarded() {
        let (learner, learner_url) = Recorder::spawn(StatusCode::OK).await;
        let acceptor = Acceptor::new(fast_config());
        acceptor.replace_topology(with_learner(&learner_url)).await;

        let result = acceptor.accept(request(Some("A-M"), 2, &["apple"])).await;

        assert!(result.is_err());
        assert!(learner.hits().await.is_empty());
    }

    #[tokio::test]
    async fn test_accepted_without_learner() {
        let acceptor = Acceptor::new(fast_config());
        assert!(acceptor.accept(request(Some("A-M"), 0, &[])).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_learner_does_not_reject() {
        let acceptor = Acceptor::new(fast_config());
        acceptor
            .replace_topology(with_learner(&unreachable_url().await))
            .await;

        assert!(acceptor.accept(request(Some("A-M"), 1, &["mango"])).await.is_ok());
    }

    // ============================================================
    // HTTP BOUNDARY TESTS
    // ============================================================

    async fn post(uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let app = acceptor_router(Acceptor::new(fast_config()));
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_accept_endpoint_accepts() {
        let body = json!({"letter_range": "A-C", "count": 2, "words": ["apple", "cat"]});
        let (status, body) = post("/accept", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "Accepted"}));
    }

    #[tokio::test]
    async fn test_accept_endpoint_rejects_inconsistent() {
        let body = json!({"letter_range": "A-C", "count": 1, "words": ["apple", "cat"]});
        let (status, body) = post("/accept", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Validation failed"));
    }

    #[tokio::test]
    async fn test_accept_endpoint_missing_range() {
        let (status, body) = post("/accept", json!({"count": 0}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid data"}));
    }

    #[tokio::test]
    async fn test_accept_endpoint_malformed_body() {
        let (status, body) = post("/accept", "{\"letter_range\": ".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let bad_count = json!({"letter_range": "A-C", "count": -1, "words": []});
        let (status, _) = post("/accept", bad_count.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nodes_endpoint() {
        let (status, body) = post("/nodes", json!({"learner": {"url": "http://l1"}}).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "Nodes updated"}));
    }
}
