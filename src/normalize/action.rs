//! Actions understood by the normalization reducer.

use serde_json::Value;

use crate::model::raw::{RawCategory, RawPageHeader, RawPost, RawStream};
use crate::mvi::Action;

/// Query result types that can appear as keys of a stream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    GlobalPostStream,
    CategoryPostStream,
    SubscribedPostStream,
    UserPostStream,
    EditorialStream,
}

impl StreamKind {
    /// Map a response key (`globalPostStream`, ...) to its stream kind.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "globalPostStream" => Some(StreamKind::GlobalPostStream),
            "categoryPostStream" => Some(StreamKind::CategoryPostStream),
            "subscribedPostStream" => Some(StreamKind::SubscribedPostStream),
            "userPostStream" => Some(StreamKind::UserPostStream),
            "editorialStream" => Some(StreamKind::EditorialStream),
            _ => None,
        }
    }

    pub fn is_post_stream(self) -> bool {
        !matches!(self, StreamKind::EditorialStream)
    }
}

/// One recognized query result of a stream response.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamResult {
    pub kind: StreamKind,
    pub stream: RawStream,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamPayload {
    /// Recognized results, in response order.
    pub results: Vec<StreamResult>,
    /// Route path or explicit result key the page is stored under.
    pub page_key: String,
    pub query: Option<String>,
    pub variables: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesPayload {
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageHeadersPayload {
    pub page_headers: Vec<RawPageHeader>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDetailPayload {
    pub post: Option<RawPost>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadManyPostsPayload {
    pub posts: Vec<RawPost>,
    /// Page key to register the ids under, when the caller wants a page.
    pub result_key: Option<String>,
}

/// Actions that feed the normalized entity store.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction {
    /// First page of a stream loaded.
    LoadStreamSuccess(StreamPayload),

    /// Another page of a stream loaded (either direction).
    LoadNextContentSuccess(StreamPayload),

    /// Category navigation or the full category list loaded.
    LoadCategoriesSuccess(CategoriesPayload),

    LoadPageHeadersSuccess(PageHeadersPayload),

    /// A single post (with its comments) loaded.
    PostDetailSuccess(PostDetailPayload),

    /// An explicit list of posts loaded by token or id.
    LoadManyPostsSuccess(LoadManyPostsPayload),

    /// The current user followed categories; subscribed streams are stale.
    FollowCategoriesSuccess,

    /// The current user unfollowed categories; subscribed streams are stale.
    UnfollowCategoriesSuccess,
}

impl Action for EntityAction {}
