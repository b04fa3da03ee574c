//! Points in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and the spherical math on them
//! (see [`math`]).

mod datum;
pub mod impls;
pub mod math;
mod traits;

pub use datum::Datum;
pub use impls::point::GeoPoint2d;
pub use math::{
    format_coordinate, format_distance, great_circle_distance, initial_bearing,
    mercator_scale_factor, TileSize,
};
pub use traits::point::{GeoPoint, NewGeoPoint};
