//! Reducer for authentication state.

use crate::model::merge::merge_field;
use crate::mvi::Reducer;

use super::action::AuthAction;
use super::state::{AuthState, PublicToken, TokenResponse};

pub struct AuthReducer;

fn log_in(mut state: AuthState, token: TokenResponse) -> AuthState {
    state.expiration_date = token.expiration_date().or(state.expiration_date);
    merge_field(&mut state.access_token, token.access_token);
    merge_field(&mut state.token_type, token.token_type);
    merge_field(&mut state.refresh_token, token.refresh_token);
    merge_field(&mut state.expires_in, token.expires_in);
    merge_field(&mut state.created_at, token.created_at);
    state.is_logged_in = true;
    state
}

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AuthAction::ClearAuthToken => AuthState {
                access_token: None,
                expiration_date: None,
                expires_in: None,
                ..state
            },
            AuthAction::PublicTokenSuccess(token) => AuthState {
                public_token: PublicToken {
                    expiration_date: token.expiration_date(),
                    access_token: token.access_token,
                    token_type: token.token_type,
                    expires_in: token.expires_in,
                    created_at: token.created_at,
                },
                ..state
            },
            AuthAction::UserSuccess(token)
            | AuthAction::RefreshSuccess(token)
            | AuthAction::SignupSuccess(token) => log_in(state, token),
            AuthAction::NonceSuccess { nonce } => AuthState {
                nonce: Some(nonce),
                ..state
            },
            AuthAction::UpdateFromNative(native) => {
                if native.is_empty() {
                    state
                } else {
                    native
                }
            }
            AuthAction::Rehydrate(persisted) => match persisted {
                Some(persisted) => persisted.with_recomputed_expiration(),
                None => state,
            },
            AuthAction::LogoutSuccess
            | AuthAction::LogoutFailure
            | AuthAction::RefreshFailure
            | AuthAction::ResetPasswordSuccess
            | AuthAction::ProfileDeleteSuccess => AuthState::default(),
        }
    }
}
