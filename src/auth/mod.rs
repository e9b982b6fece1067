//! Authentication session state.
//!
//! - `state.rs` - User and public tokens, expiry helpers
//! - `action.rs` - Login, refresh, logout and rehydration events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::AuthAction;
pub use reducer::AuthReducer;
pub use state::{expiration_of, AuthState, PublicToken, TokenResponse};
