//! Authentication lifecycle actions.

use crate::mvi::Action;

use super::state::{AuthState, TokenResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    /// Drop the user access token but keep the refresh token.
    ClearAuthToken,

    PublicTokenSuccess(TokenResponse),

    /// User logged in.
    UserSuccess(TokenResponse),

    RefreshSuccess(TokenResponse),

    SignupSuccess(TokenResponse),

    NonceSuccess { nonce: String },

    /// Session handed over by the native host app.
    UpdateFromNative(AuthState),

    /// Persisted session restored at startup.
    Rehydrate(Option<AuthState>),

    LogoutSuccess,
    LogoutFailure,
    RefreshFailure,
    ResetPasswordSuccess,
    ProfileDeleteSuccess,
}

impl Action for AuthAction {}

impl AuthAction {
    /// Whether this action ends the user's session.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            AuthAction::LogoutSuccess
                | AuthAction::LogoutFailure
                | AuthAction::RefreshFailure
                | AuthAction::ResetPasswordSuccess
                | AuthAction::ProfileDeleteSuccess
        )
    }
}
