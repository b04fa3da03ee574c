//! Geographic types and calculations shared by map measurement tools.
//!
//! The crate is split into two parts:
//! * [`geo`] contains points on the surface of the Earth ([`geo::GeoPoint`]) and the pure functions operating on them:
//!   great-circle distance, initial bearing and Mercator scale factor.
//! * [`cartesian`] contains screen-space types that hosts use when they project geographic points to pixels.

pub mod cartesian;
pub mod error;
pub mod geo;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use error::GeoMeasureTypesError;
