//! Root state: every slice side by side, one reducer over all of them.

use serde::Serialize;
use tracing::{debug, trace};

use crate::action::Action;
use crate::auth::{AuthAction, AuthReducer, AuthState};
use crate::config::Config;
use crate::gui::{GuiAction, GuiReducer, GuiState};
use crate::legacy::{LegacyReducer, LegacyState};
use crate::mvi::{Reducer, StoreState};
use crate::normalize::EntityReducer;
use crate::store::EntityStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub entities: EntityStore,
    pub legacy: LegacyState,
    pub auth: AuthState,
    pub gui: GuiState,
}

impl StoreState for AppState {}

#[derive(Debug, Clone, Default)]
pub struct AppReducer {
    entities: EntityReducer,
    gui: GuiReducer,
}

impl AppReducer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            entities: EntityReducer::new(config.normalize.clone(), config.invalidation.clone()),
            gui: GuiReducer::new(&config.layout),
        }
    }

    /// State before any action, with the configured layout routes.
    pub fn initial_state(&self) -> AppState {
        AppState {
            gui: self.gui.initial_state(),
            ..AppState::default()
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        trace!(slice = action.slice(), "dispatch");
        match action {
            Action::Entities(action) => AppState {
                entities: self.entities.reduce(state.entities, action),
                ..state
            },
            Action::Legacy(action) => AppState {
                legacy: LegacyReducer.reduce(state.legacy, action),
                ..state
            },
            Action::Auth(action) => {
                let ends_session = action.ends_session();
                let deletes_profile = action == AuthAction::ProfileDeleteSuccess;

                let mut state = AppState {
                    auth: AuthReducer.reduce(state.auth, action),
                    ..state
                };
                if ends_session {
                    debug!("session ended, clearing cached entities");
                    state.entities = EntityStore::default();
                    state.legacy = LegacyState::default();
                }
                if deletes_profile {
                    state.gui = self.gui.reduce(state.gui, GuiAction::Reset);
                }
                state
            }
            Action::Gui(action) => AppState {
                gui: self.gui.reduce(state.gui, action),
                ..state
            },
            Action::Unrecognized(kind) => {
                debug!(action = %kind, "ignoring unrecognized action");
                state
            }
        }
    }
}
