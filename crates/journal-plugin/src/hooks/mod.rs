//! Hook extension points: payloads, callbacks, registry, and dispatcher.

pub mod callback;
pub mod dispatcher;
pub mod payload;
pub mod registry;

/// Hook names fired by the render pipeline and its collaborators.
///
/// Names are opaque strings to the registry itself; these constants only
/// keep the spelling consistent between the pipeline and plugins.
pub mod names {
    /// Fired with a [`super::payload::RenderPayload`] before rendered page
    /// content is emitted. Callbacks may return a modified payload.
    pub const BEFORE_CONTENT_RENDER: &str = "beforeContentRender";

    /// Fired when a plugin template override replaces a built-in content
    /// file. Return values are ignored.
    pub const ON_TEMPLATE_OVERRIDE: &str = "onTemplateOverride";

    /// Fired with a [`super::payload::LoginPayload`] when the external
    /// backend reports a user login. Return values are ignored.
    pub const ON_USER_LOGIN: &str = "onUserLogin";
}
