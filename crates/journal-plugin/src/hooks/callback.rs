//! Hook callback trait and closure adapter.

use std::sync::Arc;

use async_trait::async_trait;

use journal_core::AppResult;

use super::payload::HookPayload;

/// Trait implemented by every hook callback.
///
/// Returning `Ok(None)` means the callback contributes no result;
/// `Ok(Some(_))` contributes a payload to the dispatch result list.
/// An `Err` is logged by the dispatcher and never stops other callbacks.
#[async_trait]
pub trait HookCallback: Send + Sync + std::fmt::Debug {
    /// Handles a hook invocation.
    async fn invoke(&self, payload: &HookPayload) -> AppResult<Option<HookPayload>>;
}

/// A closure-based hook callback for quick registration.
pub struct FnCallback {
    /// Handler function.
    handler: Arc<
        dyn Fn(
                HookPayload,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<Option<HookPayload>>> + Send>,
            > + Send
            + Sync,
    >,
}

impl std::fmt::Debug for FnCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallback")
            .field("handler", &"<closure>")
            .finish()
    }
}

impl FnCallback {
    /// Creates a new closure-based callback.
    ///
    /// The closure receives its own clone of the payload.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(HookPayload) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = AppResult<Option<HookPayload>>> + Send + 'static,
    {
        Self {
            handler: Arc::new(move |payload| Box::pin(handler(payload))),
        }
    }

    /// Wraps a closure into an `Arc<dyn HookCallback>`.
    pub fn wrap<F, Fut>(handler: F) -> Arc<dyn HookCallback>
    where
        F: Fn(HookPayload) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = AppResult<Option<HookPayload>>> + Send + 'static,
    {
        Arc::new(Self::new(handler))
    }
}

#[async_trait]
impl HookCallback for FnCallback {
    async fn invoke(&self, payload: &HookPayload) -> AppResult<Option<HookPayload>> {
        (self.handler)(payload.clone()).await
    }
}
