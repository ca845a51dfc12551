//! Integration tests for plugin discovery and introspection.

use http::StatusCode;

use crate::helpers::{TestApp, write_plugin, write_plugin_template};

#[tokio::test]
async fn test_plugin_listing_reflects_discovery_order() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/plugins", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("plugin array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    // Sorted directory listing
    assert_eq!(names, vec!["admin_theme", "user_activity", "welcome"]);
}

#[tokio::test]
async fn test_plugin_listing_includes_registered_hooks() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/plugins", None).await;
    let plugins = response.body["data"].as_array().expect("plugin array");

    let welcome = plugins
        .iter()
        .find(|p| p["name"] == "welcome")
        .expect("welcome listed");
    assert_eq!(welcome["display_name"], "Welcome Banner");
    assert_eq!(welcome["hooks"], serde_json::json!(["beforeContentRender"]));

    // Manifest-only plugin: present, no hooks
    let theme = plugins
        .iter()
        .find(|p| p["name"] == "admin_theme")
        .expect("admin_theme listed");
    assert_eq!(theme["hooks"], serde_json::json!([]));
}

#[tokio::test]
async fn test_manifest_defaults_surface_in_listing() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/plugins", None).await;
    let plugins = response.body["data"].as_array().expect("plugin array");

    let theme = plugins
        .iter()
        .find(|p| p["name"] == "admin_theme")
        .expect("admin_theme listed");
    assert_eq!(theme["version"], "1.0.0");
    assert_eq!(theme["description"], "No description provided");
    assert_eq!(theme["author"], "Unknown");
}

#[tokio::test]
async fn test_health_reports_loaded_plugin_count() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["plugins_loaded"], 3);
}

#[tokio::test]
async fn test_first_discovered_template_override_wins() {
    // "a_theme" sorts before "admin_theme", so its override takes precedence
    let app = TestApp::new_with(|root| {
        write_plugin(root, "a_theme", "name = \"A Theme\"\n");
        write_plugin_template(
            root,
            "a_theme",
            "admin",
            "<div class=\"a-theme\">first wins</div>\n",
        );
    })
    .await;

    let (status, html) = app.get_page("/admin").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("first wins"));
    assert!(!html.contains("Administration (themed)"));
}
