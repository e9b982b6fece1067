//! Unidirectional data-flow primitives shared by every store slice.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one slice of the client store
//! - **Action**: A server response or lifecycle event, already decoded
//! - **Reducer**: Pure function that derives the next state from an action

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
