//! Integration tests for the navigation sidebar fragment.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use framecraft_integration_tests::{FakeBilling, FakeProfiles, TestApp, body_string};
use framecraft_web::config::StatusPolicy;

fn app() -> TestApp {
    TestApp::new(
        FakeProfiles::default(),
        FakeBilling::default(),
        StatusPolicy::Uniform,
    )
}

async fn fetch(uri: &str) -> (StatusCode, String) {
    let response = app()
        .send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await;
    let status = response.status();
    (status, body_string(response).await)
}

#[tokio::test]
async fn test_root_renders_nothing() {
    let (status, body) = fetch("/partials/sidebar?path=%2F").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty(), "landing page should have no sidebar");
}

#[tokio::test]
async fn test_current_route_is_the_only_active_link() {
    let (status, body) = fetch("/partials/sidebar?path=%2Fshots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("aria-current=\"page\"").count(), 1);

    let active = body
        .split("<a ")
        .find(|chunk| chunk.contains("aria-current"))
        .expect("an active link");
    assert!(active.contains("Shot List"));
    assert!(!active.contains("Photoboard"));
}

#[tokio::test]
async fn test_unmatched_route_has_no_active_link() {
    let (status, body) = fetch("/partials/sidebar?path=%2Fshots%2F42").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("aria-current"));
    for label in ["Story", "Shot List", "Photoboard", "Export", "Settings", "Help"] {
        assert!(body.contains(label), "sidebar should list {label}");
    }
}

#[tokio::test]
async fn test_missing_path_renders_panel() {
    let (status, body) = fetch("/partials/sidebar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("sidebar-group--primary"));
    assert!(!body.contains("aria-current"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = fetch("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
