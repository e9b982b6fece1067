//! Typed views of the `payload` and `meta` of each known action.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::auth::{AuthAction, AuthState, TokenResponse};
use crate::gui::{Beacon, GuiAction, LayoutMode};
use crate::legacy::LegacyAction;
use crate::model::raw::{lenient, sparse_list, RawCategory, RawPageHeader, RawPost, RawStream};
use crate::normalize::{
    CategoriesPayload, EntityAction, LoadManyPostsPayload, PageHeadersPayload, PostDetailPayload,
    StreamKind, StreamPayload, StreamResult,
};

use super::error::ActionError;
use super::kind;
use super::{Action, RawAction};

/// `{ response: { data: T } }`
#[derive(Deserialize)]
struct DataEnvelope<T> {
    response: Data<T>,
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct StreamEnvelope {
    response: Data<IndexMap<String, Value>>,
    pathname: Option<String>,
    query: Option<String>,
    variables: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryData {
    #[serde(default, deserialize_with = "sparse_list")]
    category_nav: Option<Vec<RawCategory>>,
    #[serde(default, deserialize_with = "sparse_list")]
    all_categories: Option<Vec<RawCategory>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageHeaderData {
    #[serde(default, deserialize_with = "sparse_list")]
    page_headers: Option<Vec<RawPageHeader>>,
}

#[derive(Deserialize)]
struct PostData {
    #[serde(default, deserialize_with = "lenient")]
    post: Option<RawPost>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindPostsData {
    #[serde(default, deserialize_with = "sparse_list")]
    find_posts: Option<Vec<RawPost>>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResultMeta {
    result_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MappingMeta {
    mapping_type: String,
}

#[derive(Deserialize)]
struct ResponseEnvelope<T> {
    response: T,
}

#[derive(Deserialize)]
struct PublicToken {
    token: TokenResponse,
}

#[derive(Deserialize)]
struct Nonce {
    nonce: String,
}

#[derive(Deserialize)]
struct NativeAuth {
    authentication: AuthState,
}

#[derive(Deserialize)]
struct LayoutPayload {
    mode: LayoutMode,
}

#[derive(Deserialize)]
struct LocationPayload {
    pathname: String,
}

#[derive(Deserialize)]
struct VersionPayload {
    version: String,
}

struct Decoder<'a> {
    action: &'a str,
    payload: Value,
    meta: Value,
}

impl Decoder<'_> {
    fn parse<T: DeserializeOwned>(&self, value: Value) -> Result<T, ActionError> {
        serde_json::from_value(value).map_err(|source| ActionError::MalformedPayload {
            action: self.action.to_string(),
            source,
        })
    }

    fn payload<T: DeserializeOwned>(&self) -> Result<T, ActionError> {
        self.parse(self.payload.clone())
    }

    fn meta<T: DeserializeOwned + Default>(&self) -> Result<T, ActionError> {
        if self.meta.is_null() {
            return Ok(T::default());
        }
        self.parse(self.meta.clone())
    }

    fn stream(&self) -> Result<StreamPayload, ActionError> {
        let envelope: StreamEnvelope = self.payload()?;
        let meta: ResultMeta = self.meta()?;

        let page_key = meta
            .result_key
            .or(envelope.pathname)
            .ok_or_else(|| ActionError::MissingPageKey {
                action: self.action.to_string(),
            })?;

        let mut results = Vec::new();
        for (key, value) in envelope.response.data {
            let Some(kind) = StreamKind::from_key(&key) else {
                trace!(action = self.action, key = %key, "skipping unknown stream result");
                continue;
            };
            match serde_json::from_value::<Option<RawStream>>(value) {
                Ok(Some(stream)) => results.push(StreamResult { kind, stream }),
                Ok(None) => {}
                Err(e) => trace!(
                    action = self.action,
                    key = %key,
                    "skipping malformed stream result: {}",
                    e
                ),
            }
        }

        Ok(StreamPayload {
            results,
            page_key,
            query: envelope.query,
            variables: envelope.variables,
        })
    }

    fn categories(&self) -> Result<CategoriesPayload, ActionError> {
        let envelope: DataEnvelope<CategoryData> = self.payload()?;
        let data = envelope.response.data;
        Ok(CategoriesPayload {
            categories: data
                .category_nav
                .or(data.all_categories)
                .unwrap_or_default(),
        })
    }

    fn page_headers(&self) -> Result<PageHeadersPayload, ActionError> {
        let envelope: DataEnvelope<PageHeaderData> = self.payload()?;
        Ok(PageHeadersPayload {
            page_headers: envelope.response.data.page_headers.unwrap_or_default(),
        })
    }

    fn post_detail(&self) -> Result<PostDetailPayload, ActionError> {
        let envelope: DataEnvelope<PostData> = self.payload()?;
        Ok(PostDetailPayload {
            post: envelope.response.data.post,
        })
    }

    fn load_many(&self) -> Result<LoadManyPostsPayload, ActionError> {
        let envelope: DataEnvelope<FindPostsData> = self.payload()?;
        let meta: ResultMeta = self.meta()?;
        Ok(LoadManyPostsPayload {
            posts: envelope.response.data.find_posts.unwrap_or_default(),
            result_key: meta.result_key,
        })
    }

    fn legacy_stream(&self) -> Result<LegacyAction, ActionError> {
        let meta: MappingMeta = self.parse(self.meta.clone())?;
        let envelope: ResponseEnvelope<Value> = self.payload()?;
        Ok(LegacyAction::StreamSuccess {
            mapping_type: meta.mapping_type,
            response: envelope.response,
        })
    }

    fn token(&self) -> Result<TokenResponse, ActionError> {
        let envelope: ResponseEnvelope<TokenResponse> = self.payload()?;
        Ok(envelope.response)
    }

    fn public_token(&self) -> Result<TokenResponse, ActionError> {
        let envelope: ResponseEnvelope<PublicToken> = self.payload()?;
        Ok(envelope.response.token)
    }

    fn nonce(&self) -> Result<String, ActionError> {
        let envelope: ResponseEnvelope<Nonce> = self.payload()?;
        Ok(envelope.response.nonce)
    }

    fn rehydrated(&self) -> Result<Option<AuthState>, ActionError> {
        match self.payload.get("authentication") {
            None | Some(Value::Null) => Ok(None),
            Some(persisted) => self.parse(persisted.clone()).map(Some),
        }
    }

    fn beacon(&self, beacon: Beacon) -> Result<GuiAction, ActionError> {
        let payload: VersionPayload = self.payload()?;
        Ok(GuiAction::BeaconVersion {
            beacon,
            version: payload.version,
        })
    }
}

pub(super) fn decode(raw: RawAction) -> Result<Action, ActionError> {
    let decoder = Decoder {
        action: &raw.kind,
        payload: raw.payload,
        meta: raw.meta,
    };

    let action = match raw.kind.as_str() {
        kind::V3_LOAD_STREAM_SUCCESS => {
            Action::Entities(EntityAction::LoadStreamSuccess(decoder.stream()?))
        }
        kind::V3_LOAD_NEXT_CONTENT_SUCCESS => {
            Action::Entities(EntityAction::LoadNextContentSuccess(decoder.stream()?))
        }
        kind::V3_LOAD_CATEGORIES_SUCCESS => {
            Action::Entities(EntityAction::LoadCategoriesSuccess(decoder.categories()?))
        }
        kind::V3_LOAD_PAGE_HEADERS_SUCCESS => {
            Action::Entities(EntityAction::LoadPageHeadersSuccess(decoder.page_headers()?))
        }
        kind::V3_POST_DETAIL_SUCCESS => {
            Action::Entities(EntityAction::PostDetailSuccess(decoder.post_detail()?))
        }
        kind::V3_POST_LOAD_MANY_SUCCESS => {
            Action::Entities(EntityAction::LoadManyPostsSuccess(decoder.load_many()?))
        }
        kind::PROFILE_FOLLOW_CATEGORIES_SUCCESS => {
            Action::Entities(EntityAction::FollowCategoriesSuccess)
        }
        kind::PROFILE_UNFOLLOW_CATEGORIES_SUCCESS => {
            Action::Entities(EntityAction::UnfollowCategoriesSuccess)
        }

        kind::LOAD_STREAM_REQUEST => Action::Legacy(LegacyAction::StreamRequest),
        kind::LOAD_STREAM_SUCCESS => Action::Legacy(decoder.legacy_stream()?),

        kind::AUTHENTICATION_CLEAR_AUTH_TOKEN => Action::Auth(AuthAction::ClearAuthToken),
        kind::AUTHENTICATION_PUBLIC_SUCCESS => {
            Action::Auth(AuthAction::PublicTokenSuccess(decoder.public_token()?))
        }
        kind::AUTHENTICATION_USER_SUCCESS => Action::Auth(AuthAction::UserSuccess(decoder.token()?)),
        kind::AUTHENTICATION_REFRESH_SUCCESS => {
            Action::Auth(AuthAction::RefreshSuccess(decoder.token()?))
        }
        kind::PROFILE_SIGNUP_SUCCESS => Action::Auth(AuthAction::SignupSuccess(decoder.token()?)),
        kind::AUTHENTICATION_NONCE_SUCCESS => Action::Auth(AuthAction::NonceSuccess {
            nonce: decoder.nonce()?,
        }),
        kind::UPDATE_STATE_FROM_NATIVE => {
            let payload: NativeAuth = decoder.payload()?;
            Action::Auth(AuthAction::UpdateFromNative(payload.authentication))
        }
        kind::REHYDRATE => Action::Auth(AuthAction::Rehydrate(decoder.rehydrated()?)),
        kind::AUTHENTICATION_LOGOUT_SUCCESS => Action::Auth(AuthAction::LogoutSuccess),
        kind::AUTHENTICATION_LOGOUT_FAILURE => Action::Auth(AuthAction::LogoutFailure),
        kind::AUTHENTICATION_REFRESH_FAILURE => Action::Auth(AuthAction::RefreshFailure),
        kind::AUTHENTICATION_RESET_PASSWORD_SUCCESS => {
            Action::Auth(AuthAction::ResetPasswordSuccess)
        }
        kind::PROFILE_DELETE_SUCCESS => Action::Auth(AuthAction::ProfileDeleteSuccess),

        kind::SET_LAYOUT_MODE => {
            let payload: LayoutPayload = decoder.payload()?;
            Action::Gui(GuiAction::SetLayoutMode { mode: payload.mode })
        }
        kind::UPDATE_LOCATION | kind::LOCATION_CHANGE => {
            let payload: LocationPayload = decoder.payload()?;
            Action::Gui(GuiAction::LocationChanged {
                pathname: payload.pathname,
            })
        }
        kind::BEACONS_LAST_DISCOVER_VERSION => Action::Gui(decoder.beacon(Beacon::Discover)?),
        kind::BEACONS_LAST_FOLLOWING_VERSION => Action::Gui(decoder.beacon(Beacon::Following)?),
        kind::BEACONS_LAST_STARRED_VERSION => Action::Gui(decoder.beacon(Beacon::Starred)?),

        _ => Action::Unrecognized(raw.kind.clone()),
    };
    Ok(action)
}
