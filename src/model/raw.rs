//! Wire shapes of GraphQL-style responses, before normalization.
//!
//! Everything is optional: the server sends sparse objects depending on
//! the query, and absent data must be indistinguishable from `null`.
//! Unknown keys are ignored. A nested value of the wrong shape reads as
//! absent, so one bad relation never takes its parent or siblings down.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

fn parse_or_skip<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            trace!(target_type = std::any::type_name::<T>(), "skipping malformed value: {}", e);
            None
        }
    }
}

/// Deserialize an optional field, reading a value of the wrong shape as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(parse_or_skip(Value::deserialize(deserializer)?))
}

/// Deserialize an id given either as a JSON string or a number.
pub(crate) fn flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            trace!(id = %other, "ignoring id that is neither string nor number");
            None
        }
    })
}

/// Deserialize a list whose elements may be `null` or malformed, dropping those.
///
/// A value that is not a list at all reads as absent.
pub(crate) fn sparse_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(parse_or_skip).collect()),
        Value::Null => None,
        other => {
            trace!(value = %other, "ignoring list field that is not a list");
            None
        }
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    pub avatar: Option<Value>,
    pub cover_image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub badges: Option<Vec<String>>,
    #[serde(alias = "externalLinksLink")]
    pub external_links_list: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_short_bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub settings: Option<RawUserSettings>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_stats: Option<RawUserStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_user_state: Option<RawUserState>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserSettings {
    #[serde(default, deserialize_with = "lenient")]
    pub is_collaboratable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_hireable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_commenting_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_loves_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_reposting_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_sharing_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub post_adult_content: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserStats {
    #[serde(default, deserialize_with = "lenient")]
    pub followers_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub following_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub posts_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub loves_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_views_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserState {
    #[serde(default, deserialize_with = "lenient")]
    pub relationship_priority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub allow_in_onboarding: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_creator_type: Option<bool>,
    pub tile_image: Option<Value>,
}

/// `{ username }` reference used by category post curation fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawUserRef {
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategoryPost {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub submitted_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub submitted_by: Option<RawUserRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured_by: Option<RawUserRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<RawCategory>,
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAsset {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    pub attachment: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtistInvite {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtistInviteSubmission {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    pub actions: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub artist_invite: Option<RawArtistInvite>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRegionLinks {
    #[serde(default, deserialize_with = "flexible_id")]
    pub assets: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRegion {
    #[serde(default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Option<RawRegionLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPostStats {
    #[serde(default, deserialize_with = "lenient")]
    pub loves_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub comments_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub views_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub reposts_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPostState {
    #[serde(default, deserialize_with = "lenient")]
    pub watching: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub loved: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub reposted: Option<bool>,
}

/// `{ id }` reference to a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPostRef {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawUser>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub assets: Option<Vec<RawAsset>>,
    #[serde(default, deserialize_with = "lenient")]
    pub reposted_source: Option<Box<RawPost>>,
    #[serde(default, deserialize_with = "lenient")]
    pub artist_invite_submission: Option<RawArtistInviteSubmission>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub categories: Option<Vec<RawCategory>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub category_posts: Option<Vec<RawCategoryPost>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub summary: Option<Vec<RawRegion>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub content: Option<Vec<RawRegion>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub repost_content: Option<Vec<RawRegion>>,
    #[serde(default, deserialize_with = "lenient")]
    pub post_stats: Option<RawPostStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_user_state: Option<RawPostState>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub comments: Option<Vec<RawComment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub parent_post: Option<RawPostRef>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub assets: Option<Vec<RawAsset>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub summary: Option<Vec<RawRegion>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub content: Option<Vec<RawRegion>>,
}

/// Stream descriptor attached to an editorial: `{ query, ...variables }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEditorialStream {
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub variables: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEditorial {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    pub one_by_one_image: Option<Value>,
    pub one_by_two_image: Option<Value>,
    pub two_by_one_image: Option<Value>,
    pub two_by_two_image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub post: Option<RawPost>,
    #[serde(default, deserialize_with = "lenient")]
    pub stream: Option<RawEditorialStream>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageHeader {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub post_token: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub header: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subheader: Option<String>,
    pub cta_link: Option<Value>,
    pub image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<RawUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<RawCategory>,
}

/// One paginated query result inside a stream response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStream {
    #[serde(default, deserialize_with = "lenient")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_last_page: Option<bool>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub posts: Option<Vec<RawPost>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub editorials: Option<Vec<RawEditorial>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_ids_become_strings() {
        let user: RawUser = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
    }

    #[test]
    fn null_list_elements_are_dropped() {
        let post: RawPost = serde_json::from_value(json!({
            "id": "1",
            "categories": [null, { "id": "7" }, null]
        }))
        .unwrap();
        let categories = post.categories.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id.as_deref(), Some("7"));
    }

    #[test]
    fn explicit_nulls_read_as_absent() {
        let post: RawPost = serde_json::from_value(json!({
            "id": null,
            "author": null,
            "content": null
        }))
        .unwrap();
        assert!(post.id.is_none());
        assert!(post.author.is_none());
        assert!(post.content.is_none());
    }

    #[test]
    fn malformed_relation_reads_as_absent() {
        let post: RawPost = serde_json::from_value(json!({
            "id": "2",
            "token": "t2",
            "author": "u-broken",
            "repostedSource": [1, 2],
            "postStats": { "lovesCount": "many", "viewsCount": 4 }
        }))
        .unwrap();
        assert_eq!(post.id.as_deref(), Some("2"));
        assert_eq!(post.token.as_deref(), Some("t2"));
        assert!(post.author.is_none());
        assert!(post.reposted_source.is_none());
        let stats = post.post_stats.unwrap();
        assert!(stats.loves_count.is_none());
        assert_eq!(stats.views_count, Some(4));
    }

    #[test]
    fn malformed_list_elements_are_dropped() {
        let stream: RawStream = serde_json::from_value(json!({
            "posts": [{ "id": "1" }, "garbage", { "id": "2", "categories": "art" }],
            "editorials": { "not": "a list" }
        }))
        .unwrap();
        let posts = stream.posts.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[1].categories.is_none());
        assert!(stream.editorials.is_none());
    }

    #[test]
    fn editorial_stream_splits_query_from_variables() {
        let editorial: RawEditorial = serde_json::from_value(json!({
            "id": "9",
            "stream": { "query": "findPosts", "tokens": ["a", "b"] }
        }))
        .unwrap();
        let stream = editorial.stream.unwrap();
        assert_eq!(stream.query.as_deref(), Some("findPosts"));
        assert_eq!(stream.variables.get("tokens"), Some(&json!(["a", "b"])));
    }
}
