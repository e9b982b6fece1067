//! Reducer for the flat model store.

use indexmap::IndexMap;

use crate::mvi::Reducer;

use super::action::LegacyAction;
use super::models::add_models;
use super::state::LegacyState;

pub struct LegacyReducer;

impl Reducer for LegacyReducer {
    type State = LegacyState;
    type Action = LegacyAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            LegacyAction::StreamRequest => LegacyState {
                result: IndexMap::new(),
                ..state
            },
            LegacyAction::StreamSuccess {
                mapping_type,
                response,
            } => {
                let mut state = state;
                let ids = add_models(&mut state.collections, &mapping_type, &response);

                if let Some(linked) = response.get("linked").filter(|linked| linked.is_object()) {
                    if let Some(names) = linked.as_object() {
                        for name in names.keys() {
                            add_models(&mut state.collections, name, linked);
                        }
                    }
                }

                tracing::debug!(mapping_type = %mapping_type, count = ids.len(), "stored stream result");
                state.result = IndexMap::from([(mapping_type, ids)]);
                state
            }
        }
    }
}
