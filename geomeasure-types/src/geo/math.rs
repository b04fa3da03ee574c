//! Spherical calculations on [`GeoPoint`]s.
//!
//! All functions here are pure and defined for every valid coordinate. Distances are computed on a sphere with the
//! [`Datum::WGS84`] mean radius, which is accurate enough for interactive measurement but not for surveying.

use crate::geo::datum::Datum;
use crate::geo::traits::point::GeoPoint;
use serde::{Deserialize, Serialize};

/// Cosine values with smaller magnitude are clamped to this value in [`mercator_scale_factor`].
const MIN_COS_LATITUDE: f64 = 1e-10;

/// Size of a map tile in pixels, used to convert meters into pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSize {
    /// 512 px tiles used by vector map renderers.
    #[default]
    Ideal,
    /// 256 px tiles used by classic raster tile servers.
    Standard,
    /// Any other tile size in pixels.
    Custom(u32),
}

impl TileSize {
    /// Tile size in pixels.
    pub fn pixels(&self) -> f64 {
        match self {
            TileSize::Ideal => 512.0,
            TileSize::Standard => 256.0,
            TileSize::Custom(px) => *px as f64,
        }
    }
}

/// Multiplier converting a size in meters at the given latitude into a size in tile pixels at zoom level 0.
///
/// The Mercator projection stretches everything by `1 / cos(lat)`, so markers sized with this factor keep their
/// ground size at every latitude. At the poles the cosine is clamped to `1e-10`, which keeps the result finite.
pub fn mercator_scale_factor(latitude: f64, tile_size: TileSize) -> f64 {
    let mut cos_latitude = latitude.to_radians().cos();
    if cos_latitude.abs() < MIN_COS_LATITUDE {
        cos_latitude = MIN_COS_LATITUDE;
    }

    tile_size.pixels() / (Datum::WGS84.equator_length() * cos_latitude)
}

/// Initial bearing of the great circle going from `from` to `to`, in degrees clockwise from north in `[0, 360)`.
///
/// This is the direction to start travelling in. The direction changes along a great circle, so in general
/// `initial_bearing(a, b) != initial_bearing(b, a) - 180`.
pub fn initial_bearing(from: &impl GeoPoint<Num = f64>, to: &impl GeoPoint<Num = f64>) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let d_lon = (to.lon() - from.lon()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing = y.atan2(x).to_degrees();

    (bearing + 360.0) % 360.0
}

/// Great-circle distance between two points in meters, computed with the haversine formula.
///
/// Returns exactly `0.0` for identical points and is symmetric in its arguments. The result is finite for any valid
/// coordinates, including antipodal points.
pub fn great_circle_distance(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> f64 {
    let lat1 = a.lat_rad();
    let lat2 = b.lat_rad();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    // rounding can push `h` above 1 for nearly antipodal points
    let h = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Datum::WGS84.mean_radius() * c
}

/// Human readable distance: meters below one kilometer, kilometers otherwise, always with two decimals.
///
/// ```
/// use geomeasure_types::geo::format_distance;
///
/// assert_eq!(format_distance(500.0), "500.00 m");
/// assert_eq!(format_distance(1500.0), "1.50 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.2} m")
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// Coordinates of a point as `lat, lon` with six decimals.
pub fn format_coordinate(point: &impl GeoPoint<Num = f64>) -> String {
    format!("{:.6}, {:.6}", point.lat(), point.lon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn scale_factor_at_equator() {
        assert_relative_eq!(
            mercator_scale_factor(0.0, TileSize::Ideal),
            512.0 / 40_075_016.686
        );
        assert_relative_eq!(
            mercator_scale_factor(0.0, TileSize::Standard),
            256.0 / 40_075_016.686
        );
    }

    #[test]
    fn scale_factor_grows_with_latitude() {
        let at_60 = mercator_scale_factor(60.0, TileSize::Ideal);
        assert_relative_eq!(
            at_60,
            2.0 * mercator_scale_factor(0.0, TileSize::Ideal),
            max_relative = 1e-9
        );
        assert_relative_eq!(at_60, mercator_scale_factor(-60.0, TileSize::Ideal));
    }

    #[test]
    fn scale_factor_at_poles_is_finite() {
        for lat in [90.0, -90.0] {
            let factor = mercator_scale_factor(lat, TileSize::Ideal);
            assert!(factor.is_finite());
            assert!(factor > 0.0);
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        for point in [
            latlon!(0.0, 0.0),
            latlon!(53.646622, -113.482579),
            latlon!(-89.9, 179.9),
        ] {
            assert_eq!(great_circle_distance(&point, &point), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (latlon!(0.0, 0.0), latlon!(10.0, 20.0)),
            (latlon!(-15.7975, -51.9253), latlon!(19.4326, -101.5037)),
            (latlon!(53.646622, -113.482579), latlon!(53.64669, -113.478403)),
        ];
        for (a, b) in pairs {
            assert_relative_eq!(
                great_circle_distance(&a, &b),
                great_circle_distance(&b, &a),
                max_relative = 1e-15
            );
        }
    }

    #[test]
    fn quarter_of_equator() {
        let distance = great_circle_distance(&latlon!(0.0, 0.0), &latlon!(0.0, 90.0));
        assert_relative_eq!(distance, 10_007_543.0, max_relative = 0.01);
    }

    #[test]
    fn antipodal_distance_is_finite() {
        let half_circumference = std::f64::consts::PI * Datum::WGS84.mean_radius();
        for lat in -90..=90 {
            let lat = lat as f64;
            for lon in [0.0, 45.0, -120.0] {
                let a = latlon!(lat, lon);
                let b = latlon!(-lat, lon - 180.0f64.copysign(lon + 0.5));
                let distance = great_circle_distance(&a, &b);
                assert!(distance.is_finite(), "{lat}, {lon}: {distance}");
                assert_relative_eq!(distance, half_circumference, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let distance = great_circle_distance(&latlon!(0.0, 0.0), &latlon!(0.0, 1.0));
        assert_abs_diff_eq!(distance, 111_194.93, epsilon = 0.01);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = latlon!(0.0, 0.0);
        assert_abs_diff_eq!(initial_bearing(&origin, &latlon!(0.0, 1.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &latlon!(1.0, 0.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &latlon!(0.0, -1.0)), 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &latlon!(-1.0, 0.0)), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn bearing_is_in_range() {
        let points = [
            latlon!(0.0, 0.0),
            latlon!(45.0, 179.0),
            latlon!(-45.0, -179.0),
            latlon!(89.0, 10.0),
            latlon!(-10.0, 0.0),
        ];
        for a in &points {
            for b in &points {
                let bearing = initial_bearing(a, b);
                assert!((0.0..360.0).contains(&bearing), "{bearing}");
            }
        }
    }

    #[test]
    fn bearing_is_initial_not_final() {
        let a = latlon!(50.0, -5.0);
        let b = latlon!(58.0, 3.0);
        let forward = initial_bearing(&a, &b);
        let backward = initial_bearing(&b, &a);
        assert!(((backward - forward).abs() - 180.0).abs() > 1.0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_distance(500.0), "500.00 m");
        assert_eq!(format_distance(1500.0), "1.50 km");
        assert_eq!(format_distance(999.994), "999.99 m");
        assert_eq!(format_distance(1000.0), "1.00 km");
        assert_eq!(format_distance(0.0), "0.00 m");
        assert_eq!(
            format_coordinate(&latlon!(53.646622, -113.482579)),
            "53.646622, -113.482579"
        );
    }
}
