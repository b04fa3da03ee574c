//! Concrete geographic point types.

/// [`GeoPoint2d`](point::GeoPoint2d) and the [`latlon!`](crate::latlon) macro.
pub mod point;
