//! Client-side normalized data store for a social content feed.
//!
//! Server responses arrive as dispatched actions; pure reducers merge them
//! into an id-keyed entity store with paginated id lists, alongside the
//! authentication, layout and legacy slices.

pub mod action;
pub mod app;
pub mod auth;
pub mod config;
pub mod gui;
pub mod legacy;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod normalize;
pub mod store;
