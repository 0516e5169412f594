//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is anything that can drive a state transition: a key press, a
/// resolved background lookup, a timer tick. Intents carry their payload and
/// are consumed by a reducer.
pub trait Intent: Send + 'static {}
