//! Layout modes per route and discovery beacon versions.
//!
//! The current location is part of the state, delivered through
//! `GuiAction::LocationChanged`; layout lookups never consult globals.

mod action;
mod reducer;
mod state;

pub use action::{Beacon, GuiAction};
pub use reducer::GuiReducer;
pub use state::{GuiState, LayoutMode, LayoutRoute, RoutePattern};
