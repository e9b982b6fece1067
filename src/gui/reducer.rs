//! Reducer for layout modes and beacons.

use crate::config::LayoutConfig;
use crate::mvi::Reducer;

use super::action::{Beacon, GuiAction};
use super::state::GuiState;

#[derive(Debug, Clone, Default)]
pub struct GuiReducer {
    initial: GuiState,
}

impl GuiReducer {
    pub fn new(layout: &LayoutConfig) -> Self {
        Self {
            initial: GuiState::with_routes(&layout.routes),
        }
    }

    /// State before any action has been applied.
    pub fn initial_state(&self) -> GuiState {
        self.initial.clone()
    }
}

impl Reducer for GuiReducer {
    type State = GuiState;
    type Action = GuiAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            GuiAction::LocationChanged { pathname } => GuiState {
                pathname: Some(pathname),
                ..state
            },
            GuiAction::SetLayoutMode { mode } => {
                let Some(index) = state.active_route() else {
                    return state;
                };
                if state.routes[index].mode == mode {
                    return state;
                }
                let mut state = state;
                state.routes[index].mode = mode;
                state
            }
            GuiAction::BeaconVersion { beacon, version } => {
                let mut state = state;
                let slot = match beacon {
                    Beacon::Discover => &mut state.last_discover_beacon_version,
                    Beacon::Following => &mut state.last_following_beacon_version,
                    Beacon::Starred => &mut state.last_starred_beacon_version,
                };
                *slot = Some(version);
                state
            }
            GuiAction::Reset => self.initial_state(),
        }
    }
}
