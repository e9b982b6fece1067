//! Normalization of GraphQL-style responses into the entity store.
//!
//! # Architecture
//!
//! - `action.rs` - Response actions and their typed payloads
//! - `parse.rs` - Recursive per-entity extraction (`Normalizer`)
//! - `reducer.rs` - Dispatch by action, pagination bookkeeping

mod action;
mod parse;
mod reducer;

pub use action::{
    CategoriesPayload, EntityAction, LoadManyPostsPayload, PageHeadersPayload, PostDetailPayload,
    StreamKind, StreamPayload, StreamResult,
};
pub use reducer::EntityReducer;
