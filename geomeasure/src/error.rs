//! Error types used by the crate.

use geomeasure_types::GeoMeasureTypesError;
use thiserror::Error;

/// Geomeasure error type.
///
/// Measurement operations never fail: out-of-sequence calls are ignored. Errors are only returned when parsing
/// values that come from outside of the map surface, such as user entered coordinates or style colors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoMeasureError {
    /// Color string is not a `#RRGGBB` or `#RRGGBBAA` hex value.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// Invalid geographic value.
    #[error(transparent)]
    Types(#[from] GeoMeasureTypesError),
}
