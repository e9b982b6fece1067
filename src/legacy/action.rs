//! Actions for the flat model store.

use serde_json::Value;

use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum LegacyAction {
    /// A stream request went out; the previous result is no longer current.
    StreamRequest,

    /// A stream response arrived.
    StreamSuccess {
        /// Collection holding the primary models (`users`, `posts`, ...).
        mapping_type: String,
        /// Raw response body: `{ <mapping_type>: ..., linked: { <name>: ... } }`.
        response: Value,
    },
}

impl Action for LegacyAction {}
