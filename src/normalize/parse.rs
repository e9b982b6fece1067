//! Recursive entity extraction.
//!
//! Each routine normalizes the nested entities of its wire object first,
//! then merges the object's own flat projection into its collection.
//! Objects without an id are dropped; absent relations are skipped.

use tracing::{trace, warn};

use crate::model::links::EntityKind;
use crate::model::raw::{
    RawArtistInvite, RawArtistInviteSubmission, RawAsset, RawCategory, RawCategoryPost,
    RawComment, RawEditorial, RawPageHeader, RawPost, RawUser,
};
use crate::model::{
    ArtistInvite, ArtistInviteSubmission, Asset, Category, CategoryPost, Comment, Editorial,
    PageHeader, Post, User,
};
use crate::store::EntityStore;

/// Walks wire objects and merges them into a store snapshot.
pub(crate) struct Normalizer<'a> {
    store: &'a mut EntityStore,
    max_repost_depth: usize,
    /// Ids of the posts whose reposted sources are being descended into.
    repost_chain: Vec<String>,
}

fn merged(kind: EntityKind, id: &str) {
    trace!(collection = kind.collection(), id, "merged record");
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(store: &'a mut EntityStore, max_repost_depth: usize) -> Self {
        Self {
            store,
            max_repost_depth,
            repost_chain: Vec::new(),
        }
    }

    pub(crate) fn user(&mut self, raw: &RawUser) {
        let Some(user) = User::from_raw(raw) else {
            return;
        };
        let id = user.id.clone();
        self.store.users.merge(&id, user);
        merged(EntityKind::User, &id);

        for category in raw.categories.iter().flatten() {
            self.category(category);
        }
    }

    pub(crate) fn category(&mut self, raw: &RawCategory) {
        let Some(category) = Category::from_raw(raw) else {
            return;
        };
        let id = category.id.clone();
        self.store.categories.merge(&id, category);
        merged(EntityKind::Category, &id);
    }

    fn category_post(&mut self, raw: &RawCategoryPost) {
        let Some(category_post) = CategoryPost::from_raw(raw) else {
            return;
        };
        if let Some(category) = &raw.category {
            self.category(category);
        }
        let id = category_post.id.clone();
        self.store.category_posts.merge(&id, category_post);
        merged(EntityKind::CategoryPost, &id);
    }

    fn asset(&mut self, raw: &RawAsset) {
        let Some(asset) = Asset::from_raw(raw) else {
            return;
        };
        let id = asset.id.clone();
        self.store.assets.merge(&id, asset);
        merged(EntityKind::Asset, &id);
    }

    fn artist_invite(&mut self, raw: &RawArtistInvite) {
        let Some(invite) = ArtistInvite::from_raw(raw) else {
            return;
        };
        let id = invite.id.clone();
        self.store.artist_invites.merge(&id, invite);
        merged(EntityKind::ArtistInvite, &id);
    }

    fn artist_invite_submission(&mut self, raw: &RawArtistInviteSubmission) {
        let Some(submission) = ArtistInviteSubmission::from_raw(raw) else {
            return;
        };
        if let Some(invite) = &raw.artist_invite {
            self.artist_invite(invite);
        }
        let id = submission.id.clone();
        self.store.artist_invite_submissions.merge(&id, submission);
        merged(EntityKind::ArtistInviteSubmission, &id);
    }

    pub(crate) fn post(&mut self, raw: &RawPost) {
        let Some(post) = Post::from_raw(raw) else {
            trace!("dropping post without id");
            return;
        };
        let id = post.id.clone();

        if let Some(author) = &raw.author {
            self.user(author);
        }
        for asset in raw.assets.iter().flatten() {
            self.asset(asset);
        }
        if let Some(source) = raw.reposted_source.as_deref() {
            self.reposted_source(&id, source);
        }
        if let Some(submission) = &raw.artist_invite_submission {
            self.artist_invite_submission(submission);
        }
        for category in raw.categories.iter().flatten() {
            self.category(category);
        }
        for category_post in raw.category_posts.iter().flatten() {
            self.category_post(category_post);
        }
        for comment in raw.comments.iter().flatten() {
            self.comment(comment, Some(&id));
        }

        self.store.posts.merge(&id, post);
        merged(EntityKind::Post, &id);
    }

    /// Descend into a repost's source unless that would loop or run too deep.
    /// The outer post keeps its `repostedSource` link either way.
    fn reposted_source(&mut self, post_id: &str, source: &RawPost) {
        let source_id = source.id.as_deref();
        let cyclic = source_id.is_some_and(|sid| {
            sid == post_id || self.repost_chain.iter().any(|ancestor| ancestor == sid)
        });
        if cyclic {
            warn!(post = post_id, source = ?source_id, "repost chain loops back; not descending");
            return;
        }
        if self.repost_chain.len() >= self.max_repost_depth {
            warn!(
                post = post_id,
                depth = self.repost_chain.len(),
                "repost chain deeper than configured limit; not descending"
            );
            return;
        }

        self.repost_chain.push(post_id.to_string());
        self.post(source);
        self.repost_chain.pop();
    }

    pub(crate) fn comment(&mut self, raw: &RawComment, parent: Option<&str>) {
        let Some(comment) = Comment::from_raw(raw, parent) else {
            return;
        };
        if let Some(author) = &raw.author {
            self.user(author);
        }
        for asset in raw.assets.iter().flatten() {
            self.asset(asset);
        }
        let id = comment.id.clone();
        self.store.comments.merge(&id, comment);
        merged(EntityKind::Comment, &id);
    }

    pub(crate) fn editorial(&mut self, raw: &RawEditorial) {
        let Some(editorial) = Editorial::from_raw(raw) else {
            return;
        };
        if let Some(post) = &raw.post {
            self.post(post);
        }
        let id = editorial.id.clone();
        self.store.editorials.merge(&id, editorial);
        merged(EntityKind::Editorial, &id);
    }

    pub(crate) fn page_header(&mut self, raw: &RawPageHeader) {
        let Some(header) = PageHeader::from_raw(raw) else {
            return;
        };
        if let Some(user) = &raw.user {
            self.user(user);
        }
        if let Some(category) = &raw.category {
            self.category(category);
        }
        let id = header.id.clone();
        self.store.page_headers.merge(&id, header);
        merged(EntityKind::PageHeader, &id);
    }
}
