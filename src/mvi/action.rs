//! Base trait for actions dispatched into the store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - Successful server responses carrying payloads to normalize
/// - Account lifecycle events (login, logout, deletion)
/// - Navigation events
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
