//! Shared test helpers for integration tests.
//!
//! Each test gets its own temporary plugins and templates tree so tests
//! never interfere with one another or with the repository's runtime
//! assets.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use journal_api::{AppState, build_app, build_state};
use journal_core::config::AppConfig;
use journal_plugin::Plugin;
use plugin_user_activity::UserActivityPlugin;
use plugin_welcome::WelcomePlugin;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for reaching into the hook registry and loader
    pub state: AppState,
    /// The user activity plugin instance, for inspecting recorded logins
    pub activity: Arc<UserActivityPlugin>,
    /// Owns the temporary plugins/templates tree
    _root: TempDir,
}

impl TestApp {
    /// Create a test application with the standard fixtures.
    pub async fn new() -> Self {
        Self::new_with(|_| {}).await
    }

    /// Create a test application, letting the test add extra plugin
    /// directories or templates before discovery runs.
    pub async fn new_with(setup: impl FnOnce(&Path)) -> Self {
        let root = TempDir::new().expect("create test root");

        write_template(root.path(), "home", HOME_TEMPLATE);
        write_template(root.path(), "login", LOGIN_TEMPLATE);
        write_template(root.path(), "admin", ADMIN_TEMPLATE);

        write_plugin(root.path(), "welcome", "name = \"Welcome Banner\"\n");
        write_plugin(root.path(), "user_activity", "name = \"User Activity\"\n");
        write_plugin(root.path(), "admin_theme", "name = \"Admin Theme\"\n");
        write_plugin_template(root.path(), "admin_theme", "admin", ADMIN_THEME_TEMPLATE);

        setup(root.path());

        let mut config = AppConfig::default();
        config.plugins.directory = root.path().join("plugins").display().to_string();
        config.templates.directory = root.path().join("templates").display().to_string();

        let activity = Arc::new(UserActivityPlugin::new());
        let builtins: Vec<(&str, Arc<dyn Plugin>)> = vec![
            ("welcome", Arc::new(WelcomePlugin::new())),
            ("user_activity", activity.clone() as Arc<dyn Plugin>),
        ];

        let state = build_state(config, builtins).await;
        let router = build_app(state.clone());

        Self {
            router,
            state,
            activity,
            _root: root,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Fetch a page and return the status with the raw HTML body
    pub async fn get_page(&self, path: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

const HOME_TEMPLATE: &str = r#"<div class="container mt-4">
  <h1>EasyJournal</h1>
  <p>For Authors and Reviewers</p>
</div>
"#;

const LOGIN_TEMPLATE: &str = r#"<div class="container mt-4">
  <h1>Sign In</h1>
</div>
"#;

const ADMIN_TEMPLATE: &str = r#"<div class="container mt-4">
  <h1>Administration</h1>
</div>
"#;

const ADMIN_THEME_TEMPLATE: &str = r#"<div class="container-fluid admin-theme">
  <h1>Administration (themed)</h1>
</div>
"#;

/// Write a built-in content template under the test templates root
pub fn write_template(root: &Path, page: &str, content: &str) {
    let dir = root.join("templates/content");
    std::fs::create_dir_all(&dir).expect("create templates dir");
    std::fs::write(dir.join(format!("{page}.html")), content).expect("write template");
}

/// Write a plugin directory with a manifest under the test plugins root
pub fn write_plugin(root: &Path, name: &str, manifest: &str) {
    let dir = root.join("plugins").join(name);
    std::fs::create_dir_all(&dir).expect("create plugin dir");
    std::fs::write(dir.join("plugin.toml"), manifest).expect("write manifest");
}

/// Write a template override inside a plugin directory
pub fn write_plugin_template(root: &Path, plugin: &str, page: &str, content: &str) {
    let dir = root.join("plugins").join(plugin).join("templates/content");
    std::fs::create_dir_all(&dir).expect("create override dir");
    std::fs::write(dir.join(format!("{page}.html")), content).expect("write override");
}
