//! Base trait for store state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states, sharing unchanged subtrees)
/// - Self-contained (all data needed by subscribers)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
