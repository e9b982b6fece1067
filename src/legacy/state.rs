//! State of the flat (pre-GraphQL) model store.

use indexmap::IndexMap;
use serde::Serialize;

use crate::mvi::StoreState;

use super::models::Collections;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegacyState {
    /// Models by collection name, then id.
    #[serde(flatten)]
    pub collections: Collections,
    /// Ids of the primary models of the last stream response, by mapping type.
    pub result: IndexMap<String, Vec<String>>,
}

impl StoreState for LegacyState {}
