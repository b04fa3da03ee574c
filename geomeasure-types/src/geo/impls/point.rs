use crate::error::GeoMeasureTypesError;
use crate::geo::math;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }

    /// Creates a point checking that both coordinates are finite, latitude is in `[-90, 90]` and longitude is in
    /// `[-180, 180]`.
    ///
    /// Use this at the boundary where coordinates come from user input. Points obtained from the map surface are
    /// always valid and can be created with [`NewGeoPoint::latlon`].
    ///
    /// ```
    /// use geomeasure_types::geo::GeoPoint2d;
    ///
    /// assert!(GeoPoint2d::try_latlon(53.6, -113.4).is_ok());
    /// assert!(GeoPoint2d::try_latlon(91.0, 0.0).is_err());
    /// assert!(GeoPoint2d::try_latlon(f64::NAN, 0.0).is_err());
    /// ```
    pub fn try_latlon(lat: f64, lon: f64) -> Result<Self, GeoMeasureTypesError> {
        if !lat.is_finite()
            || !lon.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Err(GeoMeasureTypesError::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Great-circle distance to the `other` point in meters.
    pub fn distance_to(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        math::great_circle_distance(self, other)
    }

    /// Initial bearing from this point towards `other` in degrees clockwise from north.
    pub fn bearing_to(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        math::initial_bearing(self, other)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geomeasure_types::geo::GeoPoint;
/// use geomeasure_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
