use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use geo_types::{point, CoordFloat};

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<GeoPoint2d> for geo_types::Point<f64> {
    fn from(value: GeoPoint2d) -> Self {
        point!(x: value.lon(), y: value.lat())
    }
}

impl From<geo_types::Point<f64>> for GeoPoint2d {
    fn from(value: geo_types::Point<f64>) -> Self {
        GeoPoint2d::latlon(value.y(), value.x())
    }
}
