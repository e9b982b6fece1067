//! Reducer trait for the store.

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must behave as a pure function: (State, Action) -> State.
/// `&self` carries static configuration only, never mutable state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions the reducer does not care about must hand `state` back
    /// untouched so callers can detect "no change" by pointer identity.
    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
}
