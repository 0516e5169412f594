//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects.
///
/// State values are immutable: a reducer consumes one and returns a new one.
/// `PartialEq` lets the view skip work when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
