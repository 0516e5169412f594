use crate::dataset::Cafe;
use crate::geo::Coordinate;
use crate::ui::mvi::UiState;

/// Smallest radius the slider control allows, in kilometers.
pub const MIN_RADIUS_KM: f64 = 1.0;
/// Largest radius the slider control allows, in kilometers.
pub const MAX_RADIUS_KM: f64 = 50.0;
/// Zoom applied when the user's location resolves.
pub const LOCATED_ZOOM: u8 = 15;

/// The single application state (MVI pattern).
///
/// Replaced wholesale by [`MapReducer`](super::MapReducer); the view always
/// observes a complete, consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    /// Resolved user position; `None` until the one-shot lookup succeeds.
    pub user_location: Option<Coordinate>,
    /// The full dataset, in load order. Never reordered or mutated.
    pub cafes: Vec<Cafe>,
    /// Id of the selected cafe, if any. Not checked against `cafes`;
    /// a dangling id simply never matches anything downstream.
    pub selected_id: Option<u32>,
    /// Map framing when no cafe is selected.
    pub center: Coordinate,
    pub zoom: u8,
    /// Filter radius in kilometers. The radius control keeps this within
    /// [`MIN_RADIUS_KM`]..=[`MAX_RADIUS_KM`]; the reducer stores it verbatim.
    pub filter_radius_km: f64,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            user_location: None,
            cafes: Vec::new(),
            selected_id: None,
            center: Coordinate::new(18.5204, 73.8567),
            zoom: 12,
            filter_radius_km: 5.0,
        }
    }
}

impl UiState for MapState {}

impl MapState {
    /// Initial state for a freshly loaded dataset and configured framing.
    pub fn new(cafes: Vec<Cafe>, center: Coordinate, zoom: u8, filter_radius_km: f64) -> Self {
        Self {
            cafes,
            center,
            zoom,
            filter_radius_km,
            ..Self::default()
        }
    }
}
