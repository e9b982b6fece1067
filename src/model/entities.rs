//! Normalized records stored in the entity collections.
//!
//! Each record is a flat projection of its wire shape: nested settings and
//! stats are pulled up to top-level fields, and relationships are kept as
//! link descriptors instead of embedded copies. Records are built with
//! `from_raw`, which returns `None` for objects without an id.

use serde::Serialize;
use serde_json::Value;

use super::links::{EntityKind, Link};
use super::merge::{merge_fields, Merge};
use super::raw::{
    RawArtistInvite, RawArtistInviteSubmission, RawAsset, RawCategory, RawCategoryPost,
    RawComment, RawEditorial, RawPageHeader, RawPost, RawUser,
};
use super::region::{parse_regions, AssetIndex, Region};

/// Ids of a list of wire objects, skipping those without one.
fn ids_of<T>(items: Option<&[T]>, id: impl Fn(&T) -> Option<&String>) -> Option<Vec<String>> {
    let items = items?;
    if items.is_empty() {
        return None;
    }
    Some(items.iter().filter_map(|item| id(item).cloned()).collect())
}

// -- Users --------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Merge for UserLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; categories);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_links_list: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_short_bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_collaboratable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hireable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_commenting_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_loves_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_reposting_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sharing_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_adult_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loves_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_views_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_priority: Option<String>,
    pub links: UserLinks,
}

impl User {
    pub fn from_raw(raw: &RawUser) -> Option<Self> {
        let id = raw.id.clone()?;
        let settings = raw.settings.clone().unwrap_or_default();
        let stats = raw.user_stats.clone().unwrap_or_default();
        Some(Self {
            id,
            username: raw.username.clone(),
            name: raw.name.clone(),
            avatar: raw.avatar.clone(),
            cover_image: raw.cover_image.clone(),
            badges: raw.badges.clone(),
            external_links_list: raw.external_links_list.clone(),
            formatted_short_bio: raw.formatted_short_bio.clone(),
            location: raw.location.clone(),
            is_collaboratable: settings.is_collaboratable,
            is_hireable: settings.is_hireable,
            has_commenting_enabled: settings.has_commenting_enabled,
            has_loves_enabled: settings.has_loves_enabled,
            has_reposting_enabled: settings.has_reposting_enabled,
            has_sharing_enabled: settings.has_sharing_enabled,
            posts_adult_content: settings.post_adult_content,
            followers_count: stats.followers_count,
            following_count: stats.following_count,
            posts_count: stats.posts_count,
            loves_count: stats.loves_count,
            total_views_count: stats.total_views_count,
            relationship_priority: raw
                .current_user_state
                .as_ref()
                .and_then(|state| state.relationship_priority.clone()),
            links: UserLinks {
                categories: ids_of(raw.categories.as_deref(), |c| c.id.as_ref()),
            },
        })
    }
}

impl Merge for User {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            username, name, avatar, cover_image, badges, external_links_list,
            formatted_short_bio, location, is_collaboratable, is_hireable,
            has_commenting_enabled, has_loves_enabled, has_reposting_enabled,
            has_sharing_enabled, posts_adult_content, followers_count,
            following_count, posts_count, loves_count, total_views_count,
            relationship_priority,
        );
        self.links.merge(incoming.links);
    }
}

// -- Categories -----------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_in_onboarding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_creator_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_image: Option<Value>,
}

impl Category {
    pub fn from_raw(raw: &RawCategory) -> Option<Self> {
        Some(Self {
            id: raw.id.clone()?,
            slug: raw.slug.clone(),
            name: raw.name.clone(),
            level: raw.level.clone(),
            order: raw.order,
            allow_in_onboarding: raw.allow_in_onboarding,
            is_creator_type: raw.is_creator_type,
            tile_image: raw.tile_image.clone(),
        })
    }
}

impl Merge for Category {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            slug, name, level, order, allow_in_onboarding, is_creator_type, tile_image,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryPostLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPost {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_by_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,
    pub links: CategoryPostLinks,
}

impl CategoryPost {
    pub fn from_raw(raw: &RawCategoryPost) -> Option<Self> {
        let category = raw.category.as_ref();
        let category_id = category.and_then(|c| c.id.clone());
        Some(Self {
            id: raw.id.clone()?,
            status: raw.status.clone(),
            submitted_at: raw.submitted_at.clone(),
            submitted_by_username: raw.submitted_by.as_ref().and_then(|u| u.username.clone()),
            featured_at: raw.featured_at.clone(),
            featured_by_username: raw.featured_by.as_ref().and_then(|u| u.username.clone()),
            category_slug: category.and_then(|c| c.slug.clone()),
            category_name: category.and_then(|c| c.name.clone()),
            links: CategoryPostLinks {
                category: category_id.clone().map(Link::category),
            },
            category_id,
            actions: raw.actions.clone(),
        })
    }
}

impl Merge for CategoryPostLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; category);
    }
}

impl Merge for CategoryPost {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            status, submitted_at, submitted_by_username, featured_at,
            featured_by_username, category_slug, category_name, category_id, actions,
        );
        self.links.merge(incoming.links);
    }
}

// -- Assets -----------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Asset {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Value>,
}

impl Asset {
    pub fn from_raw(raw: &RawAsset) -> Option<Self> {
        Some(Self {
            id: raw.id.clone()?,
            attachment: raw.attachment.clone(),
        })
    }
}

impl Merge for Asset {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; attachment);
    }
}

// -- Artist invites -----------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtistInvite {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ArtistInvite {
    pub fn from_raw(raw: &RawArtistInvite) -> Option<Self> {
        Some(Self {
            id: raw.id.clone()?,
            title: raw.title.clone(),
            slug: raw.slug.clone(),
        })
    }
}

impl Merge for ArtistInvite {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; title, slug);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInviteSubmissionLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_invite: Option<Link>,
}

impl Merge for ArtistInviteSubmissionLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; artist_invite);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtistInviteSubmission {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,
    pub links: ArtistInviteSubmissionLinks,
}

impl ArtistInviteSubmission {
    pub fn from_raw(raw: &RawArtistInviteSubmission) -> Option<Self> {
        let invite_id = raw.artist_invite.as_ref().and_then(|invite| invite.id.clone());
        Some(Self {
            id: raw.id.clone()?,
            status: raw.status.clone(),
            actions: raw.actions.clone(),
            links: ArtistInviteSubmissionLinks {
                artist_invite: invite_id.map(|id| Link::new(id, EntityKind::ArtistInvite)),
            },
        })
    }
}

impl Merge for ArtistInviteSubmission {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; status, actions);
        self.links.merge(incoming.links);
    }
}

// -- Posts --------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repost_author: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposted_source: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_posts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

impl PostLinks {
    fn from_raw(raw: &RawPost) -> Self {
        let source = raw.reposted_source.as_deref();
        let category_posts = raw.category_posts.as_deref();

        // Categories reached through curation records take precedence over
        // the plain category list.
        let categories = match category_posts {
            Some(cps) if !cps.is_empty() => Some(
                cps.iter()
                    .filter_map(|cp| cp.category.as_ref().and_then(|c| c.id.clone()))
                    .collect(),
            ),
            _ => ids_of(raw.categories.as_deref(), |c| c.id.as_ref()),
        };

        Self {
            author: raw.author.as_ref().and_then(|a| a.id.clone()).map(Link::user),
            repost_author: source
                .and_then(|s| s.author.as_ref())
                .and_then(|a| a.id.clone())
                .map(Link::user),
            reposted_source: source.and_then(|s| s.id.clone()).map(Link::post),
            categories,
            category_posts: ids_of(category_posts, |cp| cp.id.as_ref()),
            comments: ids_of(raw.comments.as_deref(), |c| c.id.as_ref()),
        }
    }
}

impl Merge for PostLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            author, repost_author, reposted_source, categories, category_posts, comments,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_invite_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_invite_submission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<Region>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Region>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repost_content: Option<Vec<Region>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loves_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposts_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watching: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposted: Option<bool>,
    pub links: PostLinks,
}

impl Post {
    pub fn from_raw(raw: &RawPost) -> Option<Self> {
        let id = raw.id.clone()?;
        let assets = AssetIndex::new(raw.assets.as_deref());
        let repost_assets = AssetIndex::new(
            raw.reposted_source
                .as_deref()
                .and_then(|source| source.assets.as_deref()),
        );
        let stats = raw.post_stats.clone().unwrap_or_default();
        let state = raw.current_user_state.clone().unwrap_or_default();
        let submission = raw.artist_invite_submission.as_ref();

        Some(Self {
            author_id: raw.author.as_ref().and_then(|a| a.id.clone()),
            token: raw.token.clone(),
            created_at: raw.created_at.clone(),
            artist_invite_id: submission
                .and_then(|s| s.artist_invite.as_ref())
                .and_then(|invite| invite.id.clone()),
            artist_invite_submission_id: submission.and_then(|s| s.id.clone()),
            summary: parse_regions(&id, raw.summary.as_deref(), &assets),
            content: parse_regions(&id, raw.content.as_deref(), &assets),
            repost_content: parse_regions(&id, raw.repost_content.as_deref(), &repost_assets),
            loves_count: stats.loves_count,
            comments_count: stats.comments_count,
            views_count: stats.views_count,
            reposts_count: stats.reposts_count,
            watching: state.watching,
            loved: state.loved,
            reposted: state.reposted,
            links: PostLinks::from_raw(raw),
            id,
        })
    }
}

impl Merge for Post {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            author_id, token, created_at, artist_invite_id, artist_invite_submission_id,
            summary, content, repost_content, loves_count, comments_count, views_count,
            reposts_count, watching, loved, reposted,
        );
        self.links.merge(incoming.links);
    }
}

// -- Comments -----------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_post: Option<Link>,
}

impl Merge for CommentLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; author, parent_post);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<Region>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Region>>,
    pub links: CommentLinks,
}

impl Comment {
    /// `parent` fills in the parent post when the comment omits it.
    pub fn from_raw(raw: &RawComment, parent: Option<&str>) -> Option<Self> {
        let id = raw.id.clone()?;
        let assets = AssetIndex::new(raw.assets.as_deref());
        let author_id = raw.author.as_ref().and_then(|a| a.id.clone());
        let parent_post_id = raw
            .parent_post
            .as_ref()
            .and_then(|p| p.id.clone())
            .or_else(|| parent.map(str::to_string));

        Some(Self {
            created_at: raw.created_at.clone(),
            summary: parse_regions(&id, raw.summary.as_deref(), &assets),
            content: parse_regions(&id, raw.content.as_deref(), &assets),
            links: CommentLinks {
                author: author_id.clone().map(Link::user),
                parent_post: parent_post_id.clone().map(Link::post),
            },
            author_id,
            parent_post_id,
            id,
        })
    }
}

impl Merge for Comment {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; author_id, parent_post_id, created_at, summary, content);
        self.links.merge(incoming.links);
    }
}

// -- Editorials ---------------------------------------------------------------------

/// Query descriptor for an editorial that renders a post stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostStreamLink {
    pub query: String,
    pub variables: Value,
}

impl Merge for PostStreamLink {
    fn merge(&mut self, incoming: Self) {
        *self = incoming;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_stream: Option<PostStreamLink>,
}

impl Merge for EditorialLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; post, post_stream);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_by_one_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_by_two_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_by_one_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_by_two_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub links: EditorialLinks,
}

impl Editorial {
    pub fn from_raw(raw: &RawEditorial) -> Option<Self> {
        let post_stream = raw.stream.as_ref().and_then(|stream| {
            let query = stream.query.clone()?;
            Some(PostStreamLink {
                query,
                variables: Value::Object(stream.variables.clone()),
            })
        });
        Some(Self {
            id: raw.id.clone()?,
            kind: raw.kind.as_deref().map(str::to_lowercase),
            title: raw.title.clone(),
            rendered_subtitle: raw.subtitle.clone(),
            one_by_one_image: raw.one_by_one_image.clone(),
            one_by_two_image: raw.one_by_two_image.clone(),
            two_by_one_image: raw.two_by_one_image.clone(),
            two_by_two_image: raw.two_by_two_image.clone(),
            url: raw.url.clone(),
            path: raw.path.clone(),
            links: EditorialLinks {
                post: raw.post.as_ref().and_then(|p| p.id.clone()).map(Link::post),
                post_stream,
            },
        })
    }
}

impl Merge for Editorial {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            kind, title, rendered_subtitle, one_by_one_image, one_by_two_image,
            two_by_one_image, two_by_two_image, url, path,
        );
        self.links.merge(incoming.links);
    }
}

// -- Page headers -------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageHeaderLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Link>,
}

impl Merge for PageHeaderLinks {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming; user, category);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub links: PageHeaderLinks,
}

impl PageHeader {
    pub fn from_raw(raw: &RawPageHeader) -> Option<Self> {
        let user_id = raw.user.as_ref().and_then(|u| u.id.clone());
        let category_id = raw.category.as_ref().and_then(|c| c.id.clone());
        Some(Self {
            id: raw.id.clone()?,
            kind: raw.kind.clone(),
            slug: raw.slug.clone(),
            post_token: raw.post_token.clone(),
            header: raw.header.clone(),
            subheader: raw.subheader.clone(),
            cta_link: raw.cta_link.clone(),
            image: raw.image.clone(),
            links: PageHeaderLinks {
                user: user_id.clone().map(Link::user),
                category: category_id.clone().map(Link::category),
            },
            user_id,
            category_id,
        })
    }
}

impl Merge for PageHeader {
    fn merge(&mut self, incoming: Self) {
        merge_fields!(self, incoming;
            kind, slug, post_token, header, subheader, cta_link, image, user_id, category_id,
        );
        self.links.merge(incoming.links);
    }
}
