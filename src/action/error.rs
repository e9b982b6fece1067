use thiserror::Error;

/// Errors raised while turning a dispatched action into a typed [`Action`].
///
/// [`Action`]: super::Action
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action is not an object with a string `type`: {source}")]
    UnknownShape {
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed payload for '{action}': {source}")]
    MalformedPayload {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{action}' carries neither meta.resultKey nor payload.pathname")]
    MissingPageKey { action: String },
}
