/// Parameters of the Earth model used by the calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    mean_radius: f64,
    equator_length: f64,
}

impl Datum {
    /// WGS84 with the conventional 6371 km mean radius for spherical calculations and the Web Mercator equator
    /// length.
    pub const WGS84: Self = Datum {
        mean_radius: 6_371_000.0,
        equator_length: 40_075_016.686,
    };

    /// Radius of the sphere used for great-circle distances, in meters.
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// Length of the equator in meters, used to convert between meters and Mercator pixels.
    pub fn equator_length(&self) -> f64 {
        self.equator_length
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wgs84_equator_matches_semimajor_axis() {
        assert_abs_diff_eq!(
            Datum::WGS84.equator_length(),
            2.0 * std::f64::consts::PI * 6_378_137.0,
            epsilon = 1e-3
        );
        assert_eq!(Datum::default(), Datum::WGS84);
    }
}
