//! Geomeasure is the interactive part of a map frontend: a click-to-measure distance tool and diamond marker
//! geometry. It does not render anything and does not depend on a particular map widget. The host map surface gives
//! it geographic coordinates of pointer events and draws what it gets back.
//!
//! # Quick start
//!
//! ```
//! use geomeasure::control::{MeasureController, MeasureEvent, MeasureEventHandler};
//! use geomeasure::MeasureConfiguration;
//! use geomeasure_types::latlon;
//!
//! let mut controller = MeasureController::new(MeasureConfiguration::default());
//!
//! controller.handle(&MeasureEvent::Toggle);
//! controller.handle(&MeasureEvent::Click(latlon!(0.0, 0.0).into()));
//! controller.handle(&MeasureEvent::Click(latlon!(0.0, 1.0).into()));
//!
//! assert_eq!(controller.session().summary().count(), 1);
//! println!("{}", controller.session().summary());
//! ```
//!
//! # Main components
//!
//! * [`MeasurementSession`](measure::MeasurementSession) is the state machine that collects clicked points into
//!   [`Measurement`](measure::Measurement)s. It can be used directly by applications that have their own event
//!   handling.
//! * [`control`] contains a [`MeasureController`](control::MeasureController) that drives a session from
//!   [`MeasureEvent`](control::MeasureEvent)s, and an [`EventDispatcher`](control::EventDispatcher) to chain it with
//!   other handlers.
//! * [`marker`] builds diamond markers for groups of points.
//!
//! Geographic math lives in the [`geomeasure_types`] crate, which is reexported.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod config;
pub mod control;
pub mod error;
pub mod marker;
pub mod measure;

#[cfg(test)]
mod tests;

pub use config::MeasureConfiguration;
pub use error::GeoMeasureError;

// Reexport geomeasure_types
pub use geomeasure_types;
