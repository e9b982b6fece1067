//! Tests for the root reducer: slice routing and account lifecycle resets.

mod common;

use common::*;
use feedstore::action::Action;
use feedstore::app::AppReducer;
use feedstore::config::Config;
use feedstore::gui::LayoutMode;
use feedstore::mvi::Reducer;
use pretty_assertions::assert_eq;
use serde_json::json;

fn login() -> serde_json::Value {
    json!({
        "type": "AUTHENTICATION.USER_SUCCESS",
        "payload": { "response": { "accessToken": "a", "refreshToken": "r", "expiresIn": 60, "createdAt": 1 } }
    })
}

fn seeded() -> Vec<serde_json::Value> {
    vec![
        login(),
        stream_success("/discover", vec![post("1", user("u1", "ada"))], json!({})),
        json!({
            "type": "LOAD_STREAM_SUCCESS",
            "meta": { "mappingType": "users" },
            "payload": { "response": { "users": [{ "id": "9" }] } }
        }),
        json!({ "type": "UPDATE_LOCATION", "payload": { "pathname": "/discover" } }),
        json!({ "type": "SET_LAYOUT_MODE", "payload": { "mode": "list" } }),
    ]
}

#[test]
fn unknown_action_returns_same_state() {
    let reducer = AppReducer::from_config(&Config::default());
    let state = replay(seeded());
    let next = reducer.reduce(state.clone(), Action::Unrecognized("UNKNOWN".to_string()));

    assert!(next.entities.ptr_eq(&state.entities));
    assert_eq!(next, state);
}

#[test]
fn actions_reach_their_slices() {
    let state = replay(seeded());

    assert!(state.auth.is_logged_in);
    assert_eq!(state.entities.page_ids("/discover"), ["1"]);
    assert!(state.entities.users.contains("u1"));
    assert_eq!(state.legacy.result["users"], ["9"]);
    assert_eq!(state.gui.pathname.as_deref(), Some("/discover"));
    assert_eq!(state.gui.layout_mode(), Some(LayoutMode::List));
}

#[test]
fn logout_clears_cached_data_but_keeps_layout() {
    let mut actions = seeded();
    actions.push(json!({ "type": "AUTHENTICATION.LOGOUT_SUCCESS" }));
    let state = replay(actions);

    assert!(!state.auth.is_logged_in);
    assert!(state.entities.posts.is_empty());
    assert!(state.entities.pages.is_empty());
    assert!(state.legacy.collections.is_empty());
    assert_eq!(state.gui.layout_mode(), Some(LayoutMode::List));
}

#[test]
fn profile_delete_also_resets_layout() {
    let mut actions = seeded();
    actions.push(json!({ "type": "PROFILE.DELETE_SUCCESS" }));
    let state = replay(actions);

    let reducer = AppReducer::from_config(&Config::default());
    assert_eq!(state, reducer.initial_state());
}

#[test]
fn clearing_the_access_token_keeps_cached_data() {
    let mut actions = seeded();
    actions.push(json!({ "type": "AUTHENTICATION.CLEAR_AUTH_TOKEN" }));
    let state = replay(actions);

    assert!(state.auth.access_token.is_none());
    assert!(state.entities.posts.contains("1"));
}

#[test]
fn configured_routes_drive_layout_lookup() {
    let (_dir, path) = temp_config(
        r#"
[[layout.routes]]
label = "everything"
mode = "list"
pattern = "/.*"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let reducer = AppReducer::from_config(&config);
    let state = reducer.reduce(
        reducer.initial_state(),
        decode(json!({ "type": "@@router/LOCATION_CHANGE", "payload": { "pathname": "/discover" } })),
    );
    assert_eq!(state.gui.routes.len(), 1);
    assert_eq!(state.gui.layout_mode(), Some(LayoutMode::List));
}

#[test]
fn state_serializes_by_slice() {
    let state = replay(seeded());
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["entities"]["posts"]["1"]["token"], json!("token-1"));
    assert_eq!(value["entities"]["pages"]["/discover"]["ids"], json!(["1"]));
    assert_eq!(value["legacy"]["users"]["9"], json!({ "id": "9" }));
    assert_eq!(value["auth"]["accessToken"], json!("a"));
    assert_eq!(value["gui"]["pathname"], json!("/discover"));
}

#[test]
fn absent_fields_are_omitted_from_replay_output() {
    let state = replay(vec![stream_success("/discover", vec![post("1", user("u1", "ada"))], json!({}))]);
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["entities"]["users"]["u1"], json!({ "id": "u1", "username": "ada", "links": {} }));
    let post = value["entities"]["posts"]["1"].as_object().unwrap();
    assert!(!post.contains_key("createdAt"));
    assert!(!post.contains_key("summary"));
    let links = post["links"].as_object().unwrap();
    assert_eq!(links["author"], json!({ "id": "u1", "type": "user" }));
    assert!(!links.contains_key("categories"));
    assert!(!links.contains_key("repostedSource"));

    let pagination = value["entities"]["pages"]["/discover"]["pagination"].as_object().unwrap();
    assert_eq!(pagination["next"], json!("cursor-next"));
    assert!(pagination.contains_key("variables"));
}
