//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use blog_common::RateLimitConfig;
use integration_tests::{
    assert_json, assert_status, check_test_env, unique_slug, ErrorBody, LikeStateBody,
    TestServer, ToggleBody,
};
use reqwest::StatusCode;

fn likes_path(slug: &str) -> String {
    format!("/content/{slug}/likes")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let response = session.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let response = session.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Like State Tests
// ============================================================================

#[tokio::test]
async fn test_unseen_content_has_zero_likes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();

    let response = session.get(&likes_path(&unique_slug())).await.unwrap();
    let state: LikeStateBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(state.count, 0);
    assert!(!state.has_liked);
}

#[tokio::test]
async fn test_first_visit_sets_session_cookie() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();

    let response = session.get(&likes_path(&unique_slug())).await.unwrap();
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("first visit must set a session cookie")
        .to_str()
        .unwrap()
        .to_owned();

    assert!(set_cookie.starts_with("blog_session_id="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));

    // Second request reuses the cookie; no new session is minted
    let response = session.get(&likes_path(&unique_slug())).await.unwrap();
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_like_toggle_sequence() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let path = likes_path(&unique_slug());

    // Initially unliked
    let state: LikeStateBody =
        assert_json(session.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(state.count, 0);
    assert!(!state.has_liked);

    // First toggle likes
    let toggle: ToggleBody = assert_json(session.post(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(toggle.action, "liked");
    assert!(toggle.liked);

    let state: LikeStateBody =
        assert_json(session.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(state.count, 1);
    assert!(state.has_liked);

    // Second toggle un-likes, back to the starting state
    let toggle: ToggleBody = assert_json(session.post(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(toggle.action, "unliked");
    assert!(!toggle.liked);

    let state: LikeStateBody =
        assert_json(session.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(state.count, 0);
    assert!(!state.has_liked);
}

#[tokio::test]
async fn test_likes_are_per_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = likes_path(&unique_slug());

    // Two visitors like the same content
    let alice = server.session().unwrap();
    let bob = server.session().unwrap();
    assert_status(alice.post(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(bob.post(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    // Both see the shared count and their own liked flag
    let state: LikeStateBody = assert_json(alice.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(state.count, 2);
    assert!(state.has_liked);

    // A third visitor sees the count but has not liked
    let carol = server.session().unwrap();
    let state: LikeStateBody = assert_json(carol.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(state.count, 2);
    assert!(!state.has_liked);
}

#[tokio::test]
async fn test_concurrent_toggles_keep_count_consistent() {
    if !check_test_env() {
        return;
    }

    let mut config = integration_tests::test_config().unwrap();
    // Headroom so the repeated rounds never trip the limiter
    config.rate_limit.max_requests = 100;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let session = server.session().unwrap();

    // Several rounds to give the two requests a chance to interleave
    for _ in 0..5 {
        let path = likes_path(&unique_slug());

        // Establish the session cookie before racing, so both toggles
        // carry the same identity
        assert_status(session.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

        let (first, second) = tokio::join!(session.post(&path), session.post(&path));
        assert_eq!(first.unwrap().status(), StatusCode::OK);
        assert_eq!(second.unwrap().status(), StatusCode::OK);

        // Whatever the interleaving, the composite key bounds the relation
        // at one row per pair: the count is 0 or 1 and always agrees with
        // the caller's liked flag, never a double-counted 2
        let state: LikeStateBody =
            assert_json(session.get(&path).await.unwrap(), StatusCode::OK)
                .await
                .unwrap();
        assert!(state.count <= 1);
        assert_eq!(state.count, i64::from(state.has_liked));
    }
}

#[tokio::test]
async fn test_invalid_slug_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();

    let response = session.get("/content/Not%20A%20Slug/likes").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!body.error.is_empty());
}

// ============================================================================
// Rate Limiting Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_rate_limit() {
    if !check_test_env() {
        return;
    }

    let mut config = integration_tests::test_config().unwrap();
    config.rate_limit = RateLimitConfig {
        max_requests: 3,
        window_ms: 60_000,
        sweep_interval_secs: 300,
    };
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let session = server.session().unwrap();
    let path = likes_path(&unique_slug());

    // The budget admits exactly three toggles
    for expected_remaining in ["2", "1", "0"] {
        let response = session.post(&path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok()),
            Some(expected_remaining)
        );
        assert_eq!(
            response
                .headers()
                .get("x-ratelimit-limit")
                .and_then(|v| v.to_str().ok()),
            Some("3")
        );
    }

    // The fourth is rejected with a retry hint
    let response = session.post(&path).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().get("retry-after").is_some());
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.error.is_empty());

    // Reads are exempt and still reflect the admitted toggles (3 toggles
    // by one session: like, unlike, like)
    let state: LikeStateBody =
        assert_json(session.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(state.count, 1);
    assert!(state.has_liked);
}

#[tokio::test]
async fn test_rate_limit_is_per_client_address() {
    if !check_test_env() {
        return;
    }

    let mut config = integration_tests::test_config().unwrap();
    config.rate_limit.max_requests = 1;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let session = server.session().unwrap();
    let path = likes_path(&unique_slug());

    // First client exhausts its budget
    assert_status(
        session.post_as(&path, "203.0.113.1").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_status(
        session.post_as(&path, "203.0.113.1").await.unwrap(),
        StatusCode::TOO_MANY_REQUESTS,
    )
    .await
    .unwrap();

    // A different client address is unaffected
    assert_status(
        session.post_as(&path, "203.0.113.2").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
}
