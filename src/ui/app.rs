use tracing::{info, warn};

use crate::geo::Coordinate;
use crate::ui::map::{MapIntent, MapReducer, MapState, MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::ui::mvi::Reducer;
use crate::ui::view_model::ViewModel;

/// Outcome of the one-shot location lookup, for the header.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    Pending,
    Located(Coordinate),
    Failed(String),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Application state (MVI pattern). Replaced wholesale on every intent.
    map_state: MapState,
    /// Cursor into the visible list. Presentation-local, not part of the
    /// reducer's state; clamped against the current visible list on use.
    list_cursor: usize,
    location_status: LocationStatus,
}

impl App {
    pub fn new(map_state: MapState) -> Self {
        Self {
            should_quit: false,
            map_state,
            list_cursor: 0,
            location_status: LocationStatus::Pending,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn map_state(&self) -> &MapState {
        &self.map_state
    }

    pub fn location_status(&self) -> &LocationStatus {
        &self.location_status
    }

    /// Cursor position clamped to the current visible list.
    pub fn list_cursor(&self) -> usize {
        let len = ViewModel::project(&self.map_state).visible.len();
        self.list_cursor.min(len.saturating_sub(1))
    }

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, map_state, MapReducer, MapIntent::Refresh);
    }

    pub fn on_location_resolved(&mut self, coordinate: Coordinate) {
        info!(
            lat = coordinate.lat,
            lng = coordinate.lng,
            "user location resolved"
        );
        self.location_status = LocationStatus::Located(coordinate);
        dispatch_mvi!(self, map_state, MapReducer, MapIntent::SetUserLocation(coordinate));
    }

    pub fn on_location_failed(&mut self, message: String) {
        warn!("Location error: {message}");
        self.location_status = LocationStatus::Failed(message);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = ViewModel::project(&self.map_state).visible.len();
        if len == 0 {
            self.list_cursor = 0;
            return;
        }
        let current = self.list_cursor.min(len - 1) as isize;
        self.list_cursor = current.saturating_add(delta).clamp(0, len as isize - 1) as usize;
    }

    /// Selects the cafe under the cursor, if the visible list is non-empty.
    pub fn select_under_cursor(&mut self) {
        let id = {
            let view = ViewModel::project(&self.map_state);
            if view.visible.is_empty() {
                return;
            }
            view.visible[self.list_cursor.min(view.visible.len() - 1)].cafe.id
        };
        dispatch_mvi!(self, map_state, MapReducer, MapIntent::SelectCafe(id));
    }

    /// Steps the filter radius by `delta` kilometers, clamped to the
    /// control's 1..=50 bounds. Clamping happens here, at the control,
    /// not in the reducer.
    pub fn adjust_radius(&mut self, delta: f64) {
        let km = (self.map_state.filter_radius_km + delta).clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
        dispatch_mvi!(self, map_state, MapReducer, MapIntent::SetFilterRadius(km));
    }
}
