//! Integration tests for the normalization reducer.

mod common;

use common::*;
use feedstore::config::{InvalidationConfig, NormalizeConfig};
use feedstore::model::{Link, RegionKind};
use feedstore::mvi::Reducer;
use feedstore::normalize::EntityReducer;
use feedstore::store::EntityStore;
use pretty_assertions::assert_eq;
use serde_json::json;

fn reduce(store: EntityStore, action: serde_json::Value) -> EntityStore {
    EntityReducer::default().reduce(store, entity_action(action))
}

fn post_detail(post: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "V3.POST.DETAIL_SUCCESS",
        "payload": { "response": { "data": { "post": post } } }
    })
}

// -- merge semantics ----------------------------------------------------------

#[test]
fn parsing_twice_equals_parsing_once() {
    let action = stream_success(
        "/discover",
        vec![post("1", user("u1", "ada")), post("2", user("u2", "grace"))],
        json!({}),
    );
    let once = reduce(EntityStore::default(), action.clone());
    let twice = reduce(once.clone(), action);
    assert_eq!(once, twice);
}

#[test]
fn null_never_overwrites_existing_field() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({ "id": "1", "author": { "id": "u1", "username": "ada", "name": "Ada" } })),
    );
    let store = reduce(
        store,
        post_detail(json!({ "id": "1", "author": { "id": "u1", "username": null } })),
    );

    let user = store.users.get("u1").unwrap();
    assert_eq!(user.username.as_deref(), Some("ada"));
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[test]
fn partial_update_leaves_other_fields_untouched() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "1",
            "token": "abc",
            "postStats": { "lovesCount": 3, "viewsCount": 10 },
            "author": { "id": "u1", "username": "ada", "location": "London" }
        })),
    );
    let store = reduce(
        store,
        post_detail(json!({ "id": "1", "postStats": { "lovesCount": 4 }, "author": { "id": "u1", "name": "X" } })),
    );

    let post = store.posts.get("1").unwrap();
    assert_eq!(post.token.as_deref(), Some("abc"));
    assert_eq!(post.loves_count, Some(4));
    assert_eq!(post.views_count, Some(10));

    let user = store.users.get("u1").unwrap();
    assert_eq!(user.name.as_deref(), Some("X"));
    assert_eq!(user.username.as_deref(), Some("ada"));
    assert_eq!(user.location.as_deref(), Some("London"));
}

#[test]
fn settings_are_flattened_onto_user() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "1",
            "author": {
                "id": "u1",
                "settings": { "isHireable": true, "hasLovesEnabled": false },
                "userStats": { "followersCount": 12 }
            }
        })),
    );
    let user = store.users.get("u1").unwrap();
    assert_eq!(user.is_hireable, Some(true));
    assert_eq!(user.has_loves_enabled, Some(false));
    assert_eq!(user.followers_count, Some(12));
}

#[test]
fn post_without_id_is_dropped() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({ "token": "orphan", "author": { "id": "u1" } })),
    );
    assert!(store.posts.is_empty());
    assert!(store.users.is_empty());
}

#[test]
fn malformed_author_only_drops_the_author() {
    let store = reduce(
        EntityStore::default(),
        stream_success(
            "/discover",
            vec![json!({ "id": "1" }), json!({ "id": "2", "author": "u-broken" })],
            json!({}),
        ),
    );
    assert_eq!(store.page_ids("/discover"), ["1", "2"]);
    assert!(store.users.is_empty());
    assert_eq!(store.posts.get("1").unwrap().links.author, None);
    assert_eq!(store.posts.get("2").unwrap().links.author, None);
}

#[test]
fn missing_post_leaves_store_untouched() {
    let before = EntityStore::default();
    let after = reduce(before.clone(), post_detail(serde_json::Value::Null));
    assert!(after.ptr_eq(&before));
}

// -- pagination ---------------------------------------------------------------

#[test]
fn first_page_takes_response_ids() {
    let store = reduce(
        EntityStore::default(),
        stream_success("/discover", vec![post("a", user("u1", "ada")), post("b", user("u1", "ada"))], json!({})),
    );
    assert_eq!(store.page_ids("/discover"), ["a", "b"]);

    let page = store.page("/discover").unwrap();
    assert_eq!(page.pagination.next.as_deref(), Some("cursor-next"));
    assert_eq!(page.pagination.query.as_deref(), Some("globalPostStream"));
    assert_eq!(page.pagination.is_last_page, Some(false));
}

#[test]
fn head_reload_prepends_new_ids() {
    let author = user("u1", "ada");
    let store = reduce(
        EntityStore::default(),
        stream_success("/discover", vec![post("a", author.clone()), post("b", author.clone())], json!({})),
    );
    let store = reduce(
        store,
        stream_success("/discover", vec![post("c", author.clone()), post("d", author)], json!({})),
    );
    assert_eq!(store.page_ids("/discover"), ["c", "d", "a", "b"]);
}

#[test]
fn continuation_appends_new_ids() {
    let author = user("u1", "ada");
    let store = reduce(
        EntityStore::default(),
        stream_success("/discover", vec![post("a", author.clone()), post("b", author.clone())], json!({})),
    );
    let store = reduce(
        store,
        next_content_success("/discover", vec![post("c", author.clone()), post("d", author)], "cursor-next"),
    );

    assert_eq!(store.page_ids("/discover"), ["a", "b", "c", "d"]);
    let pagination = &store.page("/discover").unwrap().pagination;
    assert_eq!(pagination.next.as_deref(), Some("cursor-after"));
    assert_eq!(pagination.is_last_page, Some(true));
    assert_eq!(pagination.variables, Some(json!({ "before": "cursor-next" })));
}

#[test]
fn repeated_ids_keep_their_first_position() {
    let author = user("u1", "ada");
    let store = reduce(
        EntityStore::default(),
        stream_success("/discover", vec![post("a", author.clone()), post("b", author.clone())], json!({})),
    );
    let store = reduce(
        store,
        next_content_success("/discover", vec![post("b", author.clone()), post("c", author)], "cursor-next"),
    );
    assert_eq!(store.page_ids("/discover"), ["a", "b", "c"]);
}

#[test]
fn result_key_overrides_pathname() {
    let mut action = stream_success("/discover", vec![post("a", user("u1", "ada"))], json!({}));
    action["meta"] = json!({ "resultKey": "/discover/featured" });
    let store = reduce(EntityStore::default(), action);

    assert_eq!(store.page_ids("/discover/featured"), ["a"]);
    assert!(store.page("/discover").is_none());
}

#[test]
fn unknown_stream_kinds_are_ignored() {
    let action = json!({
        "type": "V3.LOAD_STREAM_SUCCESS",
        "payload": {
            "response": { "data": { "somethingElse": { "posts": [{ "id": "x" }] } } },
            "pathname": "/odd"
        }
    });
    let store = reduce(EntityStore::default(), action);
    assert!(store.posts.is_empty());
    assert!(store.page("/odd").is_none());
}

// -- relationships ------------------------------------------------------------

#[test]
fn repost_normalizes_both_posts_and_authors() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "outer",
            "author": { "id": "u1", "username": "reposter" },
            "repostedSource": {
                "id": "inner",
                "author": { "id": "u2", "username": "original" }
            }
        })),
    );

    assert!(store.posts.contains("outer"));
    assert!(store.posts.contains("inner"));
    assert!(store.users.contains("u1"));
    assert!(store.users.contains("u2"));

    let outer = store.posts.get("outer").unwrap();
    assert_eq!(outer.links.reposted_source, Some(Link::post("inner")));
    assert_eq!(outer.links.repost_author, Some(Link::user("u2")));
    assert_eq!(outer.links.author, Some(Link::user("u1")));
    assert_eq!(
        store.posts.get("inner").unwrap().links.author,
        Some(Link::user("u2"))
    );
}

#[test]
fn repost_cycle_terminates() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "a",
            "repostedSource": { "id": "b", "repostedSource": { "id": "a", "token": "loop" } }
        })),
    );
    assert_eq!(store.posts.len(), 2);
    assert_eq!(
        store.posts.get("b").unwrap().links.reposted_source,
        Some(Link::post("a"))
    );
}

#[test]
fn configured_repost_depth_is_respected() {
    let reducer = EntityReducer::new(
        NormalizeConfig { max_repost_depth: 1 },
        InvalidationConfig::default(),
    );
    let store = reducer.reduce(
        EntityStore::default(),
        entity_action(post_detail(json!({
            "id": "p0",
            "repostedSource": { "id": "p1", "repostedSource": { "id": "p2" } }
        }))),
    );
    assert!(store.posts.contains("p1"));
    assert!(!store.posts.contains("p2"));
}

#[test]
fn category_posts_link_categories() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "1",
            "categories": [{ "id": "c-plain", "name": "Plain" }],
            "categoryPosts": [{
                "id": "cp1",
                "status": "featured",
                "category": { "id": "c-art", "slug": "art", "name": "Art" }
            }]
        })),
    );

    let post = store.posts.get("1").unwrap();
    assert_eq!(post.links.categories, Some(vec!["c-art".to_string()]));
    assert_eq!(post.links.category_posts, Some(vec!["cp1".to_string()]));
    assert!(store.categories.contains("c-art"));
    assert!(store.categories.contains("c-plain"));
    assert_eq!(
        store.category_posts.get("cp1").unwrap().status.as_deref(),
        Some("featured")
    );
}

#[test]
fn image_regions_resolve_their_asset() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({
            "id": "9",
            "assets": [{ "id": "as1", "attachment": { "hdpi": { "url": "https://img/1.png" } } }],
            "content": [
                { "kind": "text", "data": "<p>hi</p>" },
                { "kind": "image", "data": { "url": "https://img/1.png", "alt_text": "one" }, "links": { "assets": "as1" } }
            ]
        })),
    );

    let content = store.posts.get("9").unwrap().content.as_ref().unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(content[0].id, "9-0");
    assert_eq!(content[1].kind, Some(RegionKind::Image));
    assert_eq!(content[1].data["altText"], json!("one"));
    assert_eq!(content[1].asset.as_ref().map(|a| a.id.as_str()), Some("as1"));
    assert!(store.assets.contains("as1"));
}

#[test]
fn absent_regions_keep_earlier_content() {
    let store = reduce(
        EntityStore::default(),
        post_detail(json!({ "id": "1", "content": [{ "kind": "text", "data": "<p>a</p>" }] })),
    );
    let store = reduce(store, post_detail(json!({ "id": "1", "token": "t" })));
    assert_eq!(store.posts.get("1").unwrap().content.as_ref().map(Vec::len), Some(1));
}

// -- other response types -----------------------------------------------------

#[test]
fn editorial_stream_stores_editorials_and_their_posts() {
    let action = json!({
        "type": "V3.LOAD_STREAM_SUCCESS",
        "payload": {
            "response": {
                "data": {
                    "editorialStream": {
                        "next": "e-next",
                        "isLastPage": false,
                        "editorials": [
                            { "id": "e1", "kind": "POST", "subtitle": "<p>sub</p>", "post": { "id": "p1" } },
                            { "id": "e2", "kind": "POST_STREAM", "stream": { "query": "findPosts", "tokens": ["t1"] } }
                        ]
                    }
                }
            },
            "pathname": "/"
        }
    });
    let store = reduce(EntityStore::default(), action);

    assert_eq!(store.page_ids("/"), ["e1", "e2"]);
    let e1 = store.editorials.get("e1").unwrap();
    assert_eq!(e1.kind.as_deref(), Some("post"));
    assert_eq!(e1.rendered_subtitle.as_deref(), Some("<p>sub</p>"));
    assert_eq!(e1.links.post, Some(Link::post("p1")));
    assert!(store.posts.contains("p1"));

    let stream = store.editorials.get("e2").unwrap().links.post_stream.as_ref().unwrap();
    assert_eq!(stream.query, "findPosts");
    assert_eq!(stream.variables, json!({ "tokens": ["t1"] }));
}

#[test]
fn categories_come_from_either_query() {
    let nav = json!({
        "type": "V3.LOAD_CATEGORIES_SUCCESS",
        "payload": { "response": { "data": { "categoryNav": [{ "id": "1", "slug": "art" }] } } }
    });
    let all = json!({
        "type": "V3.LOAD_CATEGORIES_SUCCESS",
        "payload": { "response": { "data": { "allCategories": [{ "id": "2", "slug": "music" }] } } }
    });
    let store = reduce(reduce(EntityStore::default(), nav), all);
    assert_eq!(store.categories.ids().collect::<Vec<_>>(), ["1", "2"]);
}

#[test]
fn page_headers_link_user_and_category() {
    let store = reduce(
        EntityStore::default(),
        json!({
            "type": "V3.LOAD_PAGE_HEADERS_SUCCESS",
            "payload": { "response": { "data": { "pageHeaders": [{
                "id": "h1",
                "kind": "CATEGORY",
                "header": "Art",
                "user": { "id": "u1", "username": "curator" },
                "category": { "id": "c1", "slug": "art" }
            }] } } }
        }),
    );
    let header = store.page_headers.get("h1").unwrap();
    assert_eq!(header.links.user, Some(Link::user("u1")));
    assert_eq!(header.links.category, Some(Link::category("c1")));
    assert!(store.users.contains("u1"));
    assert!(store.categories.contains("c1"));
}

#[test]
fn load_many_registers_complete_page_under_result_key() {
    let store = reduce(
        EntityStore::default(),
        json!({
            "type": "V3.POST.LOAD_MANY_SUCCESS",
            "payload": { "response": { "data": { "findPosts": [{ "id": "1" }, { "id": "2" }] } } },
            "meta": { "resultKey": "invite-posts" }
        }),
    );
    assert_eq!(store.page_ids("invite-posts"), ["1", "2"]);
    assert_eq!(store.page("invite-posts").unwrap().pagination.is_last_page, Some(true));
}

#[test]
fn load_many_without_result_key_only_stores_posts() {
    let store = reduce(
        EntityStore::default(),
        json!({
            "type": "V3.POST.LOAD_MANY_SUCCESS",
            "payload": { "response": { "data": { "findPosts": [{ "id": "1" }] } } }
        }),
    );
    assert!(store.posts.contains("1"));
    assert!(store.pages.is_empty());
}

#[test]
fn following_categories_clears_subscribed_pages_only() {
    let author = user("u1", "ada");
    let store = reduce(
        EntityStore::default(),
        stream_success("/discover/subscribed", vec![post("a", author.clone())], json!({})),
    );
    let store = reduce(store, stream_success("/discover", vec![post("b", author)], json!({})));

    let store = reduce(store, json!({ "type": "PROFILE.FOLLOW_CATEGORIES_SUCCESS" }));
    assert!(store.page("/discover/subscribed").is_none());
    assert_eq!(store.page_ids("/discover"), ["b"]);
    assert!(store.posts.contains("a"));
}

#[test]
fn untouched_collections_keep_shared_storage() {
    let before = reduce(
        EntityStore::default(),
        post_detail(json!({ "id": "1", "author": { "id": "u1" } })),
    );
    let after = reduce(
        before.clone(),
        json!({
            "type": "V3.LOAD_CATEGORIES_SUCCESS",
            "payload": { "response": { "data": { "categoryNav": [{ "id": "c1" }] } } }
        }),
    );
    assert!(after.posts.ptr_eq(&before.posts));
    assert!(after.users.ptr_eq(&before.users));
    assert!(!after.categories.ptr_eq(&before.categories));
}
