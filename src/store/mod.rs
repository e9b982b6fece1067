//! The normalized entity store.
//!
//! One copy-on-write [`Table`] per entity collection plus the `pages` table
//! of paginated id lists. Relationships between records are link
//! descriptors, so every entity lives in exactly one place.

mod page;
mod table;

use serde::Serialize;

use crate::model::{
    ArtistInvite, ArtistInviteSubmission, Asset, Category, CategoryPost, Comment, Editorial,
    PageHeader, Post, User,
};
use crate::mvi::StoreState;

pub use page::{Page, Pagination};
pub use table::Table;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStore {
    pub users: Table<User>,
    pub posts: Table<Post>,
    pub comments: Table<Comment>,
    pub categories: Table<Category>,
    pub category_posts: Table<CategoryPost>,
    pub assets: Table<Asset>,
    pub artist_invites: Table<ArtistInvite>,
    pub artist_invite_submissions: Table<ArtistInviteSubmission>,
    pub editorials: Table<Editorial>,
    pub page_headers: Table<PageHeader>,
    pub pages: Table<Page>,
}

impl StoreState for EntityStore {}

impl EntityStore {
    /// True when every collection shares storage with `other`.
    ///
    /// Subscribers use this as a constant-time "nothing changed" check.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.users.ptr_eq(&other.users)
            && self.posts.ptr_eq(&other.posts)
            && self.comments.ptr_eq(&other.comments)
            && self.categories.ptr_eq(&other.categories)
            && self.category_posts.ptr_eq(&other.category_posts)
            && self.assets.ptr_eq(&other.assets)
            && self.artist_invites.ptr_eq(&other.artist_invites)
            && self.artist_invite_submissions.ptr_eq(&other.artist_invite_submissions)
            && self.editorials.ptr_eq(&other.editorials)
            && self.page_headers.ptr_eq(&other.page_headers)
            && self.pages.ptr_eq(&other.pages)
    }

    /// Page registered under `key`, if any response has been stored for it.
    pub fn page(&self, key: &str) -> Option<&Page> {
        self.pages.get(key)
    }

    /// Ids of the page under `key`, in display order.
    pub fn page_ids(&self, key: &str) -> Vec<&str> {
        self.page(key)
            .map(|page| page.ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
