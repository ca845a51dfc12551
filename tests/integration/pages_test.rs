//! Integration tests for page rendering.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_home_page_gets_welcome_banner() {
    let app = TestApp::new().await;

    let (status, html) = app.get_page("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("For Authors and Reviewers"));
    assert!(html.contains("Welcome to the Academic Journal Submission System"));
    // Banner lands inside the container, before the page content
    let banner = html.find("alert-heading").expect("banner present");
    let heading = html.find("<h1>EasyJournal</h1>").expect("content present");
    assert!(banner < heading);
}

#[tokio::test]
async fn test_other_pages_render_without_banner() {
    let app = TestApp::new().await;

    let (status, html) = app.get_page("/login").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sign In"));
    assert!(!html.contains("alert-heading"));
}

#[tokio::test]
async fn test_missing_content_file_is_not_found() {
    // The standard fixtures never write submit.html
    let app = TestApp::new().await;

    let (status, _) = app.get_page("/submit").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_page_served_from_plugin_override() {
    let app = TestApp::new().await;

    let (status, html) = app.get_page("/admin").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Administration (themed)"));
    assert!(!html.contains("<div class=\"container mt-4\">"));
}
