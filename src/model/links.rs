//! Link descriptors: references between normalized records.

use serde::{Deserialize, Serialize};

use super::merge::Merge;

/// Collection a link points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    User,
    Post,
    Comment,
    Category,
    CategoryPost,
    Asset,
    ArtistInvite,
    ArtistInviteSubmission,
    Editorial,
    PageHeader,
}

impl EntityKind {
    /// Name of the store collection holding entities of this kind.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Post => "posts",
            EntityKind::Comment => "comments",
            EntityKind::Category => "categories",
            EntityKind::CategoryPost => "categoryPosts",
            EntityKind::Asset => "assets",
            EntityKind::ArtistInvite => "artistInvites",
            EntityKind::ArtistInviteSubmission => "artistInviteSubmissions",
            EntityKind::Editorial => "editorials",
            EntityKind::PageHeader => "pageHeaders",
        }
    }
}

/// `{ id, type }` reference to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

impl Link {
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::new(id, EntityKind::User)
    }

    pub fn post(id: impl Into<String>) -> Self {
        Self::new(id, EntityKind::Post)
    }

    pub fn category(id: impl Into<String>) -> Self {
        Self::new(id, EntityKind::Category)
    }
}

impl Merge for Link {
    fn merge(&mut self, incoming: Self) {
        *self = incoming;
    }
}
