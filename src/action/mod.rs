//! Actions as dispatched by the client, and their typed form.
//!
//! A dispatched action is a JSON object `{ type, payload, meta }`
//! ([`RawAction`]). [`Action::decode`] routes it to the slice that handles
//! it and parses the payload into that slice's action type. Unknown tags
//! are kept as [`Action::Unrecognized`] and leave every slice untouched.

mod decode;
mod error;
pub mod kind;

use serde::Deserialize;
use serde_json::Value;

use crate::auth::AuthAction;
use crate::gui::GuiAction;
use crate::legacy::LegacyAction;
use crate::mvi;
use crate::normalize::EntityAction;

pub use error::ActionError;

/// An action exactly as dispatched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub meta: Value,
}

impl RawAction {
    /// Parse one dispatched action from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, ActionError> {
        serde_json::from_str(text).map_err(|source| ActionError::UnknownShape { source })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Entities(EntityAction),
    Legacy(LegacyAction),
    Auth(AuthAction),
    Gui(GuiAction),
    /// Tag no slice handles.
    Unrecognized(String),
}

impl mvi::Action for Action {}

impl Action {
    /// Route a dispatched action to its slice and type its payload.
    ///
    /// Fails when a known action carries a payload of the wrong shape.
    pub fn decode(raw: RawAction) -> Result<Self, ActionError> {
        decode::decode(raw)
    }

    /// Name of the state slice this action is routed to.
    pub fn slice(&self) -> &'static str {
        match self {
            Action::Entities(_) => "entities",
            Action::Legacy(_) => "legacy",
            Action::Auth(_) => "auth",
            Action::Gui(_) => "gui",
            Action::Unrecognized(_) => "none",
        }
    }
}
