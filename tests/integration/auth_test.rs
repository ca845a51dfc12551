//! Integration tests for the login notification seam.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_notify_login_dispatches_to_plugins() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/notify-login",
            Some(serde_json::json!({
                "user_id": 7,
                "user_role": "author",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["accepted"], true);

    let logins = app.activity.recent_logins().await;
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].user_id, 7);
    assert_eq!(logins[0].user_role, "author");
}

#[tokio::test]
async fn test_notify_login_rejects_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/notify-login",
            Some(serde_json::json!({ "user_id": "not a number" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.activity.recent_logins().await.is_empty());
}
