//! Session tokens for the current user and the anonymous public client.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::mvi::StoreState;

/// Expiry instant of a token created at `created_at` (unix seconds)
/// and valid for `expires_in` seconds.
pub fn expiration_of(created_at: u64, expires_in: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(created_at.saturating_add(expires_in))
}

/// OAuth token response, as delivered by the token endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    #[serde(alias = "access_token")]
    pub access_token: Option<String>,
    #[serde(alias = "token_type")]
    pub token_type: Option<String>,
    #[serde(alias = "refresh_token")]
    pub refresh_token: Option<String>,
    #[serde(alias = "expires_in")]
    pub expires_in: Option<u64>,
    #[serde(alias = "created_at")]
    pub created_at: Option<u64>,
}

impl TokenResponse {
    pub fn expiration_date(&self) -> Option<SystemTime> {
        Some(expiration_of(self.created_at?, self.expires_in?))
    }
}

/// Token used for requests made before anyone logs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicToken {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub created_at: Option<u64>,
    pub expiration_date: Option<SystemTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub created_at: Option<u64>,
    pub expiration_date: Option<SystemTime>,
    pub is_logged_in: bool,
    pub nonce: Option<String>,
    pub public_token: PublicToken,
}

impl StoreState for AuthState {}

impl AuthState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the user token is missing or past its expiry at `now`.
    pub fn is_expired(&self, now: SystemTime) -> bool {
        self.expiration_date.map_or(true, |expires| expires <= now)
    }

    /// Recompute `expiration_date` from `created_at` and `expires_in`.
    pub fn with_recomputed_expiration(mut self) -> Self {
        if let (Some(created_at), Some(expires_in)) = (self.created_at, self.expires_in) {
            self.expiration_date = Some(expiration_of(created_at, expires_in));
        }
        self
    }
}
