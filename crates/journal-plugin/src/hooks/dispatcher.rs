//! Hook dispatcher — best-effort execution with per-callback failure isolation.
//!
//! A misbehaving callback is logged and skipped; it never prevents the
//! remaining callbacks from running and never surfaces to the caller.

use std::sync::Arc;

use tracing::{debug, error};

use super::payload::HookPayload;
use super::registry::HookRegistry;

/// Dispatches hooks to all registered callbacks.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Executes all callbacks for a hook against the same input payload.
    ///
    /// Callbacks run in priority order. Every non-`None` return value is
    /// collected, in invocation order, into the result list. Failures are
    /// logged with hook name and owner and skipped.
    pub async fn dispatch(&self, hook: &str, payload: &HookPayload) -> Vec<HookPayload> {
        let entries = self.registry.entries(hook).await;
        if entries.is_empty() {
            return Vec::new();
        }

        debug!(
            hook = %hook,
            callback_count = entries.len(),
            "Dispatching hook"
        );

        let mut results = Vec::new();
        for (callback, owner) in &entries {
            match callback.invoke(payload).await {
                Ok(Some(output)) => results.push(output),
                Ok(None) => {}
                Err(e) => {
                    error!(
                        hook = %hook,
                        owner = %owner,
                        error = %e,
                        "Hook callback failed; continuing with remaining callbacks"
                    );
                }
            }
        }

        results
    }

    /// Executes all callbacks for a hook, threading each returned payload
    /// into the next callback's input.
    ///
    /// Later plugins see earlier plugins' output, so content mutations
    /// compose. A callback that returns `None` or fails leaves the payload
    /// unchanged for the next callback, as does one that returns a payload
    /// of a different variant than its input — the chain's variant is
    /// fixed by the caller, so a swap is plugin misbehavior to isolate,
    /// not adopt.
    pub async fn dispatch_chained(&self, hook: &str, payload: HookPayload) -> HookPayload {
        let entries = self.registry.entries(hook).await;
        let mut current = payload;

        for (callback, owner) in &entries {
            match callback.invoke(&current).await {
                Ok(Some(next)) if next.same_variant(&current) => current = next,
                Ok(Some(_)) => {
                    error!(
                        hook = %hook,
                        owner = %owner,
                        "Hook callback returned a different payload variant; output ignored"
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    error!(
                        hook = %hook,
                        owner = %owner,
                        error = %e,
                        "Hook callback failed; payload passed through unchanged"
                    );
                }
            }
        }

        current
    }

    /// Executes all callbacks for a hook and discards the results.
    pub async fn fire_and_forget(&self, hook: &str, payload: HookPayload) {
        let _ = self.dispatch(hook, &payload).await;
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}
