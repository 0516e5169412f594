//! Render-ready projection of [`MapState`].
//!
//! Recomputed from scratch on every draw; nothing here is cached or
//! incrementally updated.

use crate::dataset::Cafe;
use crate::geo::{haversine_km, Coordinate};
use crate::ui::map::MapState;

/// Zoom applied when framing a selected cafe.
pub const SELECTED_ZOOM: u8 = 16;

/// A cafe annotated with its distance from the user, if known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedCafe<'a> {
    pub cafe: &'a Cafe,
    /// `None` until a user location has resolved.
    pub distance_km: Option<f64>,
    /// True when located and within the filter radius.
    pub in_radius: bool,
}

/// Map framing the view should render with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub center: Coordinate,
    pub zoom: u8,
}

/// Everything the widgets need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    /// Cafes shown in the sidebar list: filtered by radius once a location
    /// is known, the full set otherwise. Dataset order, never re-sorted.
    pub visible: Vec<AnnotatedCafe<'a>>,
    /// Markers drawn on the map: always the full set, in-radius flagged.
    /// Intentionally independent of the list filter.
    pub markers: Vec<AnnotatedCafe<'a>>,
    /// Selection resolved against the full set, so a selected cafe survives
    /// being filtered out of the visible list.
    pub selected: Option<&'a Cafe>,
    pub framing: Framing,
    pub user_location: Option<Coordinate>,
    pub filter_radius_km: f64,
}

impl<'a> ViewModel<'a> {
    pub fn project(state: &'a MapState) -> Self {
        let markers: Vec<AnnotatedCafe<'a>> = state
            .cafes
            .iter()
            .map(|cafe| {
                let distance_km = state
                    .user_location
                    .map(|user| haversine_km(user, cafe.coordinate()));
                AnnotatedCafe {
                    cafe,
                    distance_km,
                    in_radius: distance_km.is_some_and(|d| d <= state.filter_radius_km),
                }
            })
            .collect();

        let visible = if state.user_location.is_some() {
            markers.iter().copied().filter(|c| c.in_radius).collect()
        } else {
            markers.clone()
        };

        let selected = state
            .selected_id
            .and_then(|id| state.cafes.iter().find(|cafe| cafe.id == id));

        // A selected cafe overrides the stored framing, mirroring the
        // fly-to-on-select behavior of the map.
        let framing = match selected {
            Some(cafe) => Framing {
                center: cafe.coordinate(),
                zoom: SELECTED_ZOOM,
            },
            None => Framing {
                center: state.center,
                zoom: state.zoom,
            },
        };

        Self {
            visible,
            markers,
            selected,
            framing,
            user_location: state.user_location,
            filter_radius_km: state.filter_radius_km,
        }
    }
}
