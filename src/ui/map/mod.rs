mod intent;
mod reducer;
mod state;

pub use intent::MapIntent;
pub use reducer::MapReducer;
pub use state::{MapState, LOCATED_ZOOM, MAX_RADIUS_KM, MIN_RADIUS_KM};
