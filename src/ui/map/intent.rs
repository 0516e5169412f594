use crate::geo::Coordinate;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MapIntent {
    /// The one-shot geolocation lookup resolved. Also recenters the map on
    /// the new position; that framing change is part of the contract.
    SetUserLocation(Coordinate),
    /// Select a cafe by id. The id is stored verbatim; selecting an id that
    /// is not in the dataset is a silent no-op downstream.
    SelectCafe(u32),
    /// Replace the filter radius verbatim. Bounds are the radius control's
    /// concern, not the reducer's.
    SetFilterRadius(f64),
    /// Explicit identity transition for events that carry no state change
    /// (ticks, redraw requests).
    Refresh,
}

impl Intent for MapIntent {}
