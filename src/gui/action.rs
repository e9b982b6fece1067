//! Actions for layout modes and beacons.

use crate::mvi::Action;

use super::state::LayoutMode;

/// Discovery beacons whose last-seen version is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beacon {
    Discover,
    Following,
    Starred,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuiAction {
    /// Router moved; the path is kept in state for layout lookups.
    LocationChanged { pathname: String },

    /// User picked a layout for the current route.
    SetLayoutMode { mode: LayoutMode },

    BeaconVersion { beacon: Beacon, version: String },

    /// Restore the initial state (account deleted).
    Reset,
}

impl Action for GuiAction {}
