use cafescout::dataset::Cafe;
use cafescout::geo::Coordinate;
use cafescout::ui::map::{MapIntent, MapReducer, MapState};
use cafescout::ui::mvi::Reducer;
use cafescout::ui::view_model::{ViewModel, SELECTED_ZOOM};

/// Degrees of longitude per kilometer at the equator.
const DEG_PER_KM: f64 = 1.0 / 111.1949;

fn cafe_at_km(id: u32, km_east: f64) -> Cafe {
    Cafe {
        id,
        name: format!("Cafe {id}"),
        address: format!("{id} Equator Rd"),
        lat: 0.0,
        lng: km_east * DEG_PER_KM,
    }
}

/// Three cafes at roughly 2, 6 and 9 km east of the origin.
fn located_state() -> MapState {
    let state = MapState::new(
        vec![cafe_at_km(1, 2.0), cafe_at_km(2, 6.0), cafe_at_km(3, 9.0)],
        Coordinate::new(0.0, 0.0),
        12,
        5.0,
    );
    MapReducer::reduce(state, MapIntent::SetUserLocation(Coordinate::new(0.0, 0.0)))
}

#[test]
fn list_is_filtered_by_radius_but_markers_are_not() {
    let state = located_state();
    let view = ViewModel::project(&state);

    let visible_ids: Vec<u32> = view.visible.iter().map(|c| c.cafe.id).collect();
    assert_eq!(visible_ids, vec![1]);

    let marker_ids: Vec<u32> = view.markers.iter().map(|c| c.cafe.id).collect();
    assert_eq!(marker_ids, vec![1, 2, 3]);

    let flags: Vec<bool> = view.markers.iter().map(|c| c.in_radius).collect();
    assert_eq!(flags, vec![true, false, false]);
}

#[test]
fn distances_are_annotated_within_tolerance() {
    let state = located_state();
    let view = ViewModel::project(&state);

    let expected = [2.0, 6.0, 9.0];
    for (marker, want) in view.markers.iter().zip(expected) {
        let got = marker.distance_km.unwrap();
        assert!((got - want).abs() < 0.05, "expected ~{want} km, got {got}");
    }
}

#[test]
fn selection_survives_being_filtered_out() {
    let state = located_state();
    let state = MapReducer::reduce(state, MapIntent::SelectCafe(3));
    let state = MapReducer::reduce(state, MapIntent::SetFilterRadius(5.0));
    let view = ViewModel::project(&state);

    assert!(view.visible.iter().all(|c| c.cafe.id != 3));
    assert_eq!(view.selected.map(|c| c.id), Some(3));
}

#[test]
fn selection_frames_the_map_on_the_cafe() {
    let state = located_state();
    let state = MapReducer::reduce(state, MapIntent::SelectCafe(2));
    let view = ViewModel::project(&state);

    let selected = view.selected.unwrap();
    assert_eq!(view.framing.center, selected.coordinate());
    assert_eq!(view.framing.zoom, SELECTED_ZOOM);
}

#[test]
fn dangling_selection_resolves_to_nothing() {
    let state = located_state();
    let state = MapReducer::reduce(state, MapIntent::SelectCafe(42));
    let view = ViewModel::project(&state);

    assert!(view.selected.is_none());
    assert_eq!(view.framing.center, state.center);
}

#[test]
fn without_a_location_everything_is_visible_and_unannotated() {
    let state = MapState::new(
        vec![cafe_at_km(1, 2.0), cafe_at_km(2, 6.0), cafe_at_km(3, 9.0)],
        Coordinate::new(0.0, 0.0),
        12,
        1.0, // radius has no effect until located
    );
    let view = ViewModel::project(&state);

    assert_eq!(view.visible.len(), 3);
    assert!(view.visible.iter().all(|c| c.distance_km.is_none()));
    assert!(view.markers.iter().all(|c| !c.in_radius));
}

#[test]
fn visible_list_preserves_dataset_order() {
    // Filtering is stable: dataset order, never re-sorted by distance.
    let state = MapState::new(
        vec![cafe_at_km(7, 4.0), cafe_at_km(3, 1.0), cafe_at_km(9, 3.0)],
        Coordinate::new(0.0, 0.0),
        12,
        5.0,
    );
    let state = MapReducer::reduce(state, MapIntent::SetUserLocation(Coordinate::new(0.0, 0.0)));
    let view = ViewModel::project(&state);

    let ids: Vec<u32> = view.visible.iter().map(|c| c.cafe.id).collect();
    assert_eq!(ids, vec![7, 3, 9]);
}
