use cafescout::dataset::Cafe;
use cafescout::geo::Coordinate;
use cafescout::ui::map::{MapIntent, MapReducer, MapState, LOCATED_ZOOM};
use cafescout::ui::mvi::Reducer;

fn cafe(id: u32, lat: f64, lng: f64) -> Cafe {
    Cafe {
        id,
        name: format!("Cafe {id}"),
        address: format!("{id} Main St"),
        lat,
        lng,
    }
}

fn base_state() -> MapState {
    MapState::new(
        vec![cafe(1, 18.51, 73.84), cafe(2, 18.53, 73.86)],
        Coordinate::new(18.5204, 73.8567),
        12,
        5.0,
    )
}

#[test]
fn set_user_location_stores_position_and_reframes_map() {
    let state = base_state();
    let new = MapReducer::reduce(state, MapIntent::SetUserLocation(Coordinate::new(1.0, 2.0)));

    assert_eq!(new.user_location, Some(Coordinate::new(1.0, 2.0)));
    assert_eq!(new.center, Coordinate::new(1.0, 2.0));
    assert_eq!(new.zoom, LOCATED_ZOOM);
}

#[test]
fn set_user_location_leaves_other_fields_alone() {
    let state = base_state();
    let cafes = state.cafes.clone();
    let new = MapReducer::reduce(state, MapIntent::SetUserLocation(Coordinate::new(1.0, 2.0)));

    assert_eq!(new.cafes, cafes);
    assert_eq!(new.selected_id, None);
    assert_eq!(new.filter_radius_km, 5.0);
}

#[test]
fn select_cafe_sets_id_verbatim() {
    let new = MapReducer::reduce(base_state(), MapIntent::SelectCafe(2));
    assert_eq!(new.selected_id, Some(2));
}

#[test]
fn select_cafe_accepts_unknown_ids() {
    // No validation against the dataset: a dangling id is stored and
    // simply never resolves to a selection downstream.
    let new = MapReducer::reduce(base_state(), MapIntent::SelectCafe(999));
    assert_eq!(new.selected_id, Some(999));
}

#[test]
fn set_filter_radius_changes_only_the_radius() {
    let state = base_state();
    let expected = MapState {
        filter_radius_km: 10.0,
        ..state.clone()
    };
    let new = MapReducer::reduce(state, MapIntent::SetFilterRadius(10.0));
    assert_eq!(new, expected);
}

#[test]
fn set_filter_radius_does_not_clamp() {
    // Bounds live in the radius control, not the reducer.
    let new = MapReducer::reduce(base_state(), MapIntent::SetFilterRadius(500.0));
    assert_eq!(new.filter_radius_km, 500.0);
}

#[test]
fn refresh_is_the_identity_transition() {
    let state = base_state();
    let selected = MapReducer::reduce(state, MapIntent::SelectCafe(1));
    let refreshed = MapReducer::reduce(selected.clone(), MapIntent::Refresh);
    assert_eq!(refreshed, selected);
}

#[test]
fn transitions_compose() {
    let state = base_state();
    let state = MapReducer::reduce(state, MapIntent::SetUserLocation(Coordinate::new(18.52, 73.85)));
    let state = MapReducer::reduce(state, MapIntent::SetFilterRadius(12.0));
    let state = MapReducer::reduce(state, MapIntent::SelectCafe(1));

    assert_eq!(state.user_location, Some(Coordinate::new(18.52, 73.85)));
    assert_eq!(state.filter_radius_km, 12.0);
    assert_eq!(state.selected_id, Some(1));
    assert_eq!(state.zoom, LOCATED_ZOOM);
}
