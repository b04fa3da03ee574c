//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoMeasureTypesError {
    /// Coordinate is not finite or is out of the valid latitude/longitude range.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Latitude as given by the caller.
        lat: f64,
        /// Longitude as given by the caller.
        lon: f64,
    },
}
