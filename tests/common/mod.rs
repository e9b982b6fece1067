//! Shared fixtures: dispatched actions and response payloads built with `json!`.

#![allow(dead_code, unused_imports)]

use feedstore::action::{Action, RawAction};
use feedstore::app::{AppReducer, AppState};
use feedstore::config::Config;
use feedstore::mvi::Reducer;
use feedstore::normalize::EntityAction;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Decode a dispatched action, panicking on malformed fixtures.
pub fn decode(action: Value) -> Action {
    let raw: RawAction = serde_json::from_value(action).expect("fixture is not an action object");
    Action::decode(raw).expect("fixture payload should decode")
}

/// Decode a dispatched action that must target the entity store.
pub fn entity_action(action: Value) -> EntityAction {
    match decode(action) {
        Action::Entities(action) => action,
        other => panic!("expected entity action, got {:?}", other),
    }
}

/// Run `actions` through a default-configured app reducer.
pub fn replay(actions: Vec<Value>) -> AppState {
    let reducer = AppReducer::from_config(&Config::default());
    actions
        .into_iter()
        .fold(reducer.initial_state(), |state, action| {
            reducer.reduce(state, decode(action))
        })
}

pub fn user(id: &str, username: &str) -> Value {
    json!({ "id": id, "username": username })
}

pub fn post(id: &str, author: Value) -> Value {
    json!({
        "id": id,
        "token": format!("token-{}", id),
        "author": author,
        "content": [{ "kind": "text", "data": format!("<p>post {}</p>", id) }]
    })
}

/// `V3.LOAD_STREAM_SUCCESS` for a global post stream at `pathname`.
pub fn stream_success(pathname: &str, posts: Vec<Value>, variables: Value) -> Value {
    json!({
        "type": "V3.LOAD_STREAM_SUCCESS",
        "payload": {
            "response": {
                "data": {
                    "globalPostStream": { "next": "cursor-next", "isLastPage": false, "posts": posts }
                }
            },
            "pathname": pathname,
            "query": "globalPostStream",
            "variables": variables
        }
    })
}

/// `V3.LOAD_NEXT_CONTENT_SUCCESS` continuing the list after `before`.
pub fn next_content_success(pathname: &str, posts: Vec<Value>, before: &str) -> Value {
    json!({
        "type": "V3.LOAD_NEXT_CONTENT_SUCCESS",
        "payload": {
            "response": {
                "data": {
                    "globalPostStream": { "next": "cursor-after", "isLastPage": true, "posts": posts }
                }
            },
            "pathname": pathname,
            "query": "globalPostStream",
            "variables": { "before": before }
        }
    })
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
