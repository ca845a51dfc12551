//! Welcome banner plugin.
//!
//! Adds a welcome banner to the top of the home page by hooking
//! `beforeContentRender` and inserting markup after the opening container
//! div. Other pages pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use journal_core::AppResult;
use journal_plugin::hooks::names;
use journal_plugin::{
    DEFAULT_PRIORITY, HookCallback, HookPayload, HookRegistry, Plugin, RenderPayload,
};

const WELCOME_BANNER: &str = r#"
<div class="alert alert-info text-center mb-4">
  <h4 class="alert-heading">Welcome to the Academic Journal Submission System!</h4>
  <p>This plugin-enhanced message demonstrates the plugin system's capability to modify content.</p>
  <hr>
  <p class="mb-0">Explore our modular submission workflow designed for researchers and reviewers.</p>
</div>
"#;

/// Plugin entry point for the `welcome` plugin directory.
#[derive(Debug, Default)]
pub struct WelcomePlugin;

impl WelcomePlugin {
    /// Creates the plugin.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Plugin for WelcomePlugin {
    async fn register(&self, plugin_name: &str, hooks: &HookRegistry) -> AppResult<()> {
        info!(plugin = %plugin_name, "Registering welcome banner plugin");
        hooks
            .register(
                names::BEFORE_CONTENT_RENDER,
                Arc::new(HomeBannerHook),
                DEFAULT_PRIORITY,
                plugin_name,
            )
            .await;
        Ok(())
    }
}

/// Inserts the welcome banner into home page content.
#[derive(Debug)]
struct HomeBannerHook;

#[async_trait]
impl HookCallback for HomeBannerHook {
    async fn invoke(&self, payload: &HookPayload) -> AppResult<Option<HookPayload>> {
        let Some(render) = payload.as_render() else {
            return Ok(None);
        };
        if !is_home_page(render) {
            return Ok(None);
        }
        let Some(insert_at) = banner_insertion_point(&render.content) else {
            return Ok(None);
        };

        let mut render = render.clone();
        render.content.insert_str(insert_at, WELCOME_BANNER);
        info!("Welcome banner added to home page");
        Ok(Some(HookPayload::Render(render)))
    }
}

fn is_home_page(render: &RenderPayload) -> bool {
    render.page == "home" || render.template_path.ends_with("home.html")
}

/// Byte offset just past the opening container div, if any.
fn banner_insertion_point(content: &str) -> Option<usize> {
    let start = content.find("<div class=\"container")?;
    let close = content[start..].find('>')?;
    Some(start + close + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn render(page: &str, content: &str) -> HookPayload {
        HookPayload::Render(RenderPayload {
            page: page.to_string(),
            template_path: PathBuf::from(format!("content/{page}.html")),
            content: content.to_string(),
        })
    }

    #[tokio::test]
    async fn test_banner_added_after_container_div() {
        let payload = render("home", r#"<div class="container py-4"><p>body</p></div>"#);
        let result = HomeBannerHook
            .invoke(&payload)
            .await
            .expect("invoke")
            .expect("contribution");

        let content = &result.as_render().expect("render").content;
        assert!(content.contains("alert-heading"));
        assert!(
            content.find("alert-heading").expect("banner")
                > content.find("container").expect("container")
        );
        assert!(
            content.find("alert-heading").expect("banner") < content.find("body").expect("body")
        );
    }

    #[tokio::test]
    async fn test_other_pages_untouched() {
        let payload = render("submit", r#"<div class="container"><form></form></div>"#);
        assert!(HomeBannerHook.invoke(&payload).await.expect("invoke").is_none());
    }

    #[tokio::test]
    async fn test_home_without_container_untouched() {
        let payload = render("home", "<main>minimal</main>");
        assert!(HomeBannerHook.invoke(&payload).await.expect("invoke").is_none());
    }
}
