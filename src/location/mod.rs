use thiserror::Error;

use crate::config::Coordinates;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("no location fix available: {0}")]
    Unavailable(String),
}

/// One-shot source of current coordinates. Injected into whatever updates
/// the stored location, so callers never touch a live location subsystem
/// directly and tests can substitute their own.
pub trait LocationProvider {
    fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Provider backed by explicitly supplied coordinates (the `locate`
/// command's `--lat`/`--lng` input).
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates::new(latitude, longitude),
        }
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}
