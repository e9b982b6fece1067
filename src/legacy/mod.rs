//! Flat model store for the older REST payloads.
//!
//! Simpler sibling of the normalized store: raw objects are merged by id
//! into named collections without projection or link extraction.

mod action;
mod models;
mod reducer;
mod state;

pub use action::LegacyAction;
pub use models::{add_models, Collections, Record};
pub use reducer::LegacyReducer;
pub use state::LegacyState;
