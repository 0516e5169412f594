//! One-shot geolocation lookup.
//!
//! There is no platform positioning service to talk to from a terminal, so a
//! provider resolves the user's position from explicit sources: CLI override,
//! config file, or environment variables. The lookup runs once, off the UI
//! thread, and reports back through the app event channel. Failure leaves the
//! application fully usable; distances and filtering simply stay inactive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, warn};

use crate::geo::Coordinate;
use crate::ui::events::AppEvent;

/// Environment variables consulted as a location source of last resort.
pub const ENV_LAT: &str = "CAFESCOUT_LAT";
pub const ENV_LNG: &str = "CAFESCOUT_LNG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    #[error("no location source configured")]
    Unavailable,
    #[error("invalid location value '{value}' for {origin}")]
    Invalid { origin: String, value: String },
}

/// A source of the user's position.
///
/// `resolve` is called at most once per request, on a background thread.
pub trait LocationProvider: Send + 'static {
    fn resolve(&self) -> Result<Coordinate, LocationError>;
}

impl LocationProvider for Box<dyn LocationProvider> {
    fn resolve(&self) -> Result<Coordinate, LocationError> {
        (**self).resolve()
    }
}

/// Provider backed by an already-known coordinate (CLI flags or config).
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn resolve(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Provider reading `CAFESCOUT_LAT`/`CAFESCOUT_LNG`.
pub struct EnvLocation;

impl LocationProvider for EnvLocation {
    fn resolve(&self) -> Result<Coordinate, LocationError> {
        let lat = read_env_coord(ENV_LAT)?;
        let lng = read_env_coord(ENV_LNG)?;
        Ok(Coordinate::new(lat, lng))
    }
}

fn read_env_coord(name: &str) -> Result<f64, LocationError> {
    let raw = std::env::var(name).map_err(|_| LocationError::Unavailable)?;
    raw.trim().parse().map_err(|_| LocationError::Invalid {
        origin: name.to_string(),
        value: raw,
    })
}

/// Handle to an in-flight location lookup.
///
/// The lookup resolves at most once. Cancelling prevents delivery; a result
/// produced after cancellation is dropped.
pub struct LocationRequest {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LocationRequest {
    /// Starts the lookup on its own thread and delivers the outcome as an
    /// [`AppEvent`] on `events`.
    pub fn spawn<P: LocationProvider>(provider: P, events: Sender<AppEvent>) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = thread::spawn(move || {
            let outcome = provider.resolve();
            if flag.load(Ordering::SeqCst) {
                debug!("location lookup cancelled; dropping result");
                return;
            }
            let event = match outcome {
                Ok(coordinate) => {
                    debug!(lat = coordinate.lat, lng = coordinate.lng, "location resolved");
                    AppEvent::LocationResolved(coordinate)
                }
                Err(err) => {
                    warn!("Location error: {err}");
                    AppEvent::LocationFailed(err.to_string())
                }
            };
            let _ = events.send(event);
        });

        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Prevents delivery of a not-yet-delivered result.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Waits for the lookup thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
