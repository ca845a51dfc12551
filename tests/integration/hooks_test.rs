//! Integration tests for hook ordering and failure isolation, exercised
//! through the rendered pages rather than the registry directly.

use http::StatusCode;

use journal_core::AppError;
use journal_plugin::hooks::names;
use journal_plugin::{FnCallback, HookPayload};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_content_hooks_run_in_priority_order() {
    let app = TestApp::new().await;

    // Registered high priority first; the low-priority one must still
    // run first and its output feed into the next callback.
    for (marker, priority) in [("<!-- second -->", 20), ("<!-- first -->", 5)] {
        app.state
            .hooks
            .register(
                names::BEFORE_CONTENT_RENDER,
                FnCallback::wrap(move |p| async move {
                    let mut render = p.into_render().expect("render payload");
                    render.content.push_str(marker);
                    Ok(Some(HookPayload::Render(render)))
                }),
                priority,
                "test",
            )
            .await;
    }

    let (status, html) = app.get_page("/login").await;

    assert_eq!(status, StatusCode::OK);
    let first = html.find("<!-- first -->").expect("first marker");
    let second = html.find("<!-- second -->").expect("second marker");
    assert!(first < second);
}

#[tokio::test]
async fn test_failing_hook_does_not_break_rendering() {
    let app = TestApp::new().await;

    app.state
        .hooks
        .register(
            names::BEFORE_CONTENT_RENDER,
            FnCallback::wrap(|_| async { Err(AppError::plugin("hook exploded")) }),
            1,
            "broken",
        )
        .await;

    let (status, html) = app.get_page("/").await;

    // The failure is logged and skipped; the banner hook still runs
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome to the Academic Journal Submission System"));
}

#[tokio::test]
async fn test_variant_swapping_hook_does_not_break_pages() {
    let app = TestApp::new().await;

    app.state
        .hooks
        .register(
            names::BEFORE_CONTENT_RENDER,
            FnCallback::wrap(|_| async { Ok(Some(HookPayload::custom())) }),
            1,
            "misbehaving",
        )
        .await;

    let (status, html) = app.get_page("/login").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sign In"));
}

#[tokio::test]
async fn test_hook_returning_none_leaves_content_unchanged() {
    let app = TestApp::new().await;

    app.state
        .hooks
        .register(
            names::BEFORE_CONTENT_RENDER,
            FnCallback::wrap(|_| async { Ok(None) }),
            1,
            "observer",
        )
        .await;

    let (status, html) = app.get_page("/login").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sign In"));
}
