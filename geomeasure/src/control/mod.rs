//! Connection between the host event system and a [`MeasurementSession`](crate::measure::MeasurementSession).
//!
//! Event handling is done in two steps:
//! 1. The host converts its pointer and button events into [`MeasureEvent`]s. Pointer positions must already be
//!    unprojected into geographic coordinates by the host map surface.
//! 2. The events are given to an [`EventDispatcher`] that passes them to its [`MeasureEventHandler`]s in order until
//!    one of them stops the propagation. [`MeasureController`] is the handler that drives a measurement session.

use crate::error::GeoMeasureError;
use crate::measure::{ClickedPoint, MeasurementId};
use geomeasure_types::geo::GeoPoint2d;

mod controller;
mod dispatcher;

pub use controller::MeasureController;
pub use dispatcher::EventDispatcher;

/// Input event of the measurement tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureEvent {
    /// The measure button was pressed: start measuring if it is off, stop otherwise.
    Toggle,
    /// Turn measuring on.
    Start,
    /// Turn measuring off.
    Stop,
    /// The clear button was pressed.
    Clear,
    /// The map was clicked at the given location. A bare [`GeoPoint2d`] converts into a click with unknown zoom.
    Click(ClickedPoint),
    /// The pointer moved over the map to the given location.
    PointerMoved(GeoPoint2d),
    /// A single measurement should be deleted.
    Remove(MeasurementId),
}

impl MeasureEvent {
    /// Click at coordinates typed in by the user.
    ///
    /// Returns an error if the coordinates are not finite or out of range, so that they never reach the session.
    pub fn try_click(lat: f64, lon: f64) -> Result<Self, GeoMeasureError> {
        Ok(Self::Click(GeoPoint2d::try_latlon(lat, lon)?.into()))
    }
}

/// Value returned by a [`MeasureEventHandler`] to indicate the status of the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventPropagation {
    /// Event should be propagated to the next handler.
    Propagate,
    /// Event should not be propagated to the next handler.
    Stop,
}

/// Pointer style the host should show over the map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Normal pointer.
    #[default]
    Default,
    /// Crosshair, shown while measuring.
    Crosshair,
}

/// Measurement event handler.
pub trait MeasureEventHandler {
    /// Handle the event.
    fn handle(&mut self, event: &MeasureEvent) -> EventPropagation;
}

impl<T: FnMut(&MeasureEvent) -> EventPropagation> MeasureEventHandler for T {
    fn handle(&mut self, event: &MeasureEvent) -> EventPropagation {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomeasure_types::{latlon, GeoMeasureTypesError};

    #[test]
    fn manual_coordinates_are_validated() {
        assert_eq!(
            MeasureEvent::try_click(53.6, -113.4),
            Ok(MeasureEvent::Click(latlon!(53.6, -113.4).into()))
        );
        assert_eq!(
            MeasureEvent::try_click(f64::NAN, 0.0).map_err(|err| err.to_string()),
            Err("invalid coordinate: lat NaN, lon 0".to_string())
        );
        assert_eq!(
            MeasureEvent::try_click(0.0, 200.0),
            Err(GeoMeasureError::Types(
                GeoMeasureTypesError::InvalidCoordinate {
                    lat: 0.0,
                    lon: 200.0
                }
            ))
        );
    }
}
