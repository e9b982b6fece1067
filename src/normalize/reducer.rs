//! The normalization reducer: server responses in, normalized store out.

use tracing::{debug, trace};

use crate::config::{InvalidationConfig, NormalizeConfig};
use crate::mvi::Reducer;
use crate::store::{EntityStore, Page, Pagination};

use super::action::{EntityAction, LoadManyPostsPayload, StreamPayload};
use super::parse::Normalizer;

/// Reducer that merges response payloads into the [`EntityStore`].
///
/// Pure: the incoming store is only ever written through copy-on-write
/// tables, so snapshots held elsewhere never observe the change.
#[derive(Debug, Clone, Default)]
pub struct EntityReducer {
    normalize: NormalizeConfig,
    invalidation: InvalidationConfig,
}

impl EntityReducer {
    pub fn new(normalize: NormalizeConfig, invalidation: InvalidationConfig) -> Self {
        Self {
            normalize,
            invalidation,
        }
    }

    fn normalizer<'a>(&self, store: &'a mut EntityStore) -> Normalizer<'a> {
        Normalizer::new(store, self.normalize.max_repost_depth)
    }

    fn parse_stream(&self, store: &mut EntityStore, payload: StreamPayload) {
        let StreamPayload {
            results,
            page_key,
            query,
            variables,
        } = payload;

        for result in results {
            let stream = result.stream;
            let ids: Vec<String> = if result.kind.is_post_stream() {
                let posts = stream.posts.unwrap_or_default();
                let mut normalizer = self.normalizer(store);
                for post in &posts {
                    normalizer.post(post);
                }
                posts.into_iter().filter_map(|post| post.id).collect()
            } else {
                let editorials = stream.editorials.unwrap_or_default();
                let mut normalizer = self.normalizer(store);
                for editorial in &editorials {
                    normalizer.editorial(editorial);
                }
                editorials.into_iter().filter_map(|editorial| editorial.id).collect()
            };

            debug!(
                kind = ?result.kind,
                page = %page_key,
                count = ids.len(),
                "normalized stream page"
            );

            let pagination = Pagination {
                next: stream.next,
                query: query.clone(),
                variables: variables.clone(),
                is_last_page: stream.is_last_page,
            };
            store
                .pages
                .update(&page_key, Page::default, |page| page.absorb(ids, pagination));
        }
    }

    fn parse_load_many(&self, store: &mut EntityStore, payload: LoadManyPostsPayload) {
        let mut normalizer = self.normalizer(store);
        for post in &payload.posts {
            normalizer.post(post);
        }

        if let Some(key) = payload.result_key {
            let ids: Vec<String> = payload.posts.into_iter().filter_map(|post| post.id).collect();
            debug!(page = %key, count = ids.len(), "registered post list");
            store
                .pages
                .update(&key, Page::default, |page| page.register_complete(ids));
        }
    }

    fn reset_subscribed_pages(&self, store: &mut EntityStore) {
        for key in &self.invalidation.subscribed_pages {
            if store.pages.remove(key) {
                trace!(page = %key, "cleared subscribed stream page");
            }
        }
    }
}

impl Reducer for EntityReducer {
    type State = EntityStore;
    type Action = EntityAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        let mut store = state;
        match action {
            EntityAction::LoadStreamSuccess(payload)
            | EntityAction::LoadNextContentSuccess(payload) => {
                self.parse_stream(&mut store, payload);
            }
            EntityAction::LoadCategoriesSuccess(payload) => {
                let mut normalizer = self.normalizer(&mut store);
                for category in &payload.categories {
                    normalizer.category(category);
                }
            }
            EntityAction::LoadPageHeadersSuccess(payload) => {
                let mut normalizer = self.normalizer(&mut store);
                for header in &payload.page_headers {
                    normalizer.page_header(header);
                }
            }
            EntityAction::PostDetailSuccess(payload) => {
                if let Some(post) = &payload.post {
                    self.normalizer(&mut store).post(post);
                }
            }
            EntityAction::LoadManyPostsSuccess(payload) => {
                self.parse_load_many(&mut store, payload);
            }
            EntityAction::FollowCategoriesSuccess | EntityAction::UnfollowCategoriesSuccess => {
                self.reset_subscribed_pages(&mut store);
            }
        }
        store
    }
}
