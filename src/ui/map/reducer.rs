use crate::ui::map::intent::MapIntent;
use crate::ui::map::state::{MapState, LOCATED_ZOOM};
use crate::ui::mvi::Reducer;

pub struct MapReducer;

impl Reducer for MapReducer {
    type State = MapState;
    type Intent = MapIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MapIntent::SetUserLocation(coordinate) => MapState {
                user_location: Some(coordinate),
                center: coordinate,
                zoom: LOCATED_ZOOM,
                ..state
            },
            MapIntent::SelectCafe(id) => MapState {
                selected_id: Some(id),
                ..state
            },
            MapIntent::SetFilterRadius(km) => MapState {
                filter_radius_km: km,
                ..state
            },
            MapIntent::Refresh => state,
        }
    }
}
