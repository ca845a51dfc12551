//! Page render pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use journal_core::{AppError, AppResult};
use journal_plugin::hooks::names;
use journal_plugin::{HookDispatcher, HookPayload, LoginPayload, RenderPayload, TemplateResolver};

/// Renders page content files, applying plugin template overrides and
/// content hooks before emission.
#[derive(Debug)]
pub struct RenderPipeline {
    /// Template override resolution.
    resolver: Arc<TemplateResolver>,
    /// Hook execution.
    dispatcher: Arc<HookDispatcher>,
    /// Root directory of the built-in content templates.
    template_root: PathBuf,
}

impl RenderPipeline {
    /// Creates a new render pipeline.
    pub fn new(
        resolver: Arc<TemplateResolver>,
        dispatcher: Arc<HookDispatcher>,
        template_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver,
            dispatcher,
            template_root: template_root.into(),
        }
    }

    /// Renders one page.
    ///
    /// `page` is the logical page identifier (e.g. `"home"`) passed to
    /// hooks; `logical` is the content file's path relative to the template
    /// root (e.g. `"content/home.html"`).
    ///
    /// `beforeContentRender` callbacks are chained: each one receives the
    /// previous callback's output, so content mutations compose.
    ///
    /// `logical` must be a plain relative path; anything with traversal
    /// components is rejected before any filesystem access.
    pub async fn render_page(&self, page: &str, logical: &str) -> AppResult<String> {
        if !journal_plugin::is_safe_relative(Path::new(logical)) {
            return Err(AppError::validation(format!(
                "Refusing template path with traversal components: {logical}"
            )));
        }

        let template_path = match self.resolver.resolve_override(logical).await {
            Some((path, plugin)) => {
                self.dispatcher
                    .fire_and_forget(
                        names::ON_TEMPLATE_OVERRIDE,
                        HookPayload::custom()
                            .with_str("page", page)
                            .with_str("template_path", &path.display().to_string())
                            .with_str("plugin", &plugin),
                    )
                    .await;
                path
            }
            None => self.template_root.join(logical),
        };

        let content = read_template(&template_path).await?;

        debug!(page = %page, template = %template_path.display(), "Rendering page");

        let payload = HookPayload::Render(RenderPayload {
            page: page.to_string(),
            template_path,
            content,
        });

        let rendered = self
            .dispatcher
            .dispatch_chained(names::BEFORE_CONTENT_RENDER, payload)
            .await;

        match rendered.into_render() {
            Some(render) => Ok(render.content),
            // dispatch_chained preserves the input variant, so this cannot
            // happen for a render payload
            None => Err(AppError::internal(
                "beforeContentRender produced a non-render payload",
            )),
        }
    }

    /// Reports a user login to interested plugins. Fire-and-forget.
    pub async fn notify_login(&self, user_id: i64, user_role: &str) {
        self.dispatcher
            .fire_and_forget(
                names::ON_USER_LOGIN,
                HookPayload::Login(LoginPayload::now(user_id, user_role)),
            )
            .await;
    }
}

/// Reads a content file, mapping a missing file to a template error.
async fn read_template(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::template(format!("Content file not found: {}", path.display()))
        } else {
            AppError::with_source(
                journal_core::ErrorKind::Template,
                format!("Failed to read content file '{}'", path.display()),
                e,
            )
        }
    })
}
