use super::{ClickedPoint, Measurement};
use geomeasure_types::geo::{format_coordinate, format_distance};
use std::fmt::{Display, Formatter};

/// Distances of all measurements of a session.
///
/// Every measurement is an independent segment, so `total_distance` is the sum of `per_segment_distances`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementSummary {
    count: usize,
    per_segment_distances: Vec<f64>,
    total_distance: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    segments: Vec<[ClickedPoint; 2]>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pending: Option<ClickedPoint>,
}

impl MeasurementSummary {
    pub(super) fn new(measurements: &[Measurement], pending: Option<ClickedPoint>) -> Self {
        let per_segment_distances: Vec<f64> = measurements.iter().map(|m| m.distance()).collect();
        Self {
            count: measurements.len(),
            total_distance: per_segment_distances.iter().sum(),
            per_segment_distances,
            segments: measurements.iter().map(|m| m.clicks()).collect(),
            pending,
        }
    }

    /// Number of measurements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance of every measurement in meters, in creation order.
    pub fn per_segment_distances(&self) -> &[f64] {
        &self.per_segment_distances
    }

    /// Sum of all measurement distances in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Multiline text for a side panel or a status bar.
    ///
    /// ```text
    /// Segments: 2
    /// S1: 0.000000, 0.000000 (Z3.0) -> 0.000000, 1.000000 (Z3.0): 111.19 km
    /// S2: 10.000000, 0.000000 (Z?) -> 10.000000, 0.001000 (Z?): 109.51 m
    /// Total: 111.30 km
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for MeasurementSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 && self.pending.is_none() {
            return write!(f, "Click on map to add points");
        }

        writeln!(f, "Segments: {}", self.count)?;
        for (index, ([a, b], distance)) in self
            .segments
            .iter()
            .zip(&self.per_segment_distances)
            .enumerate()
        {
            writeln!(
                f,
                "S{}: {} -> {}: {}",
                index + 1,
                describe_click(a),
                describe_click(b),
                format_distance(*distance)
            )?;
        }

        if let Some(pending) = &self.pending {
            writeln!(f, "Pending: {}", describe_click(pending))?;
        }

        write!(f, "Total: {}", format_distance(self.total_distance))
    }
}

fn describe_click(click: &ClickedPoint) -> String {
    format!("{} ({})", format_coordinate(click), click.zoom_label())
}

#[cfg(test)]
mod tests {
    use crate::measure::{ClickedPoint, MeasurementSession};
    use approx::assert_relative_eq;
    use geomeasure_types::latlon;

    #[test]
    fn empty_summary() {
        let session = MeasurementSession::new();
        let summary = session.summary();
        assert_eq!(summary.count(), 0);
        assert!(summary.per_segment_distances().is_empty());
        assert_eq!(summary.total_distance(), 0.0);
        assert_eq!(summary.describe(), "Click on map to add points");
    }

    #[test]
    fn disjoint_segments_are_summed() {
        let mut session = MeasurementSession::new();
        session.start();
        session.register_click(ClickedPoint::new(latlon!(0.0, 0.0)).with_zoom(3.0));
        session.register_click(ClickedPoint::new(latlon!(0.0, 1.0)).with_zoom(3.0));
        session.register_click(latlon!(10.0, 0.0));
        session.register_click(latlon!(10.0, 0.001));

        let summary = session.summary();
        assert_eq!(summary.count(), 2);
        let distances = summary.per_segment_distances();
        assert_relative_eq!(summary.total_distance(), distances[0] + distances[1]);

        // the gap between the first segment end and the second segment start is not measured
        let gap = latlon!(0.0, 1.0).distance_to(&latlon!(10.0, 0.0));
        assert!(summary.total_distance() < gap);

        assert_eq!(
            summary.describe(),
            "Segments: 2\n\
             S1: 0.000000, 0.000000 (Z3.0) -> 0.000000, 1.000000 (Z3.0): 111.19 km\n\
             S2: 10.000000, 0.000000 (Z?) -> 10.000000, 0.001000 (Z?): 109.51 m\n\
             Total: 111.30 km"
        );
    }

    #[test]
    fn pending_point_is_described() {
        let mut session = MeasurementSession::new();
        session.start();
        session.register_click(ClickedPoint::new(latlon!(1.5, 2.5)).with_zoom(14.04));

        assert_eq!(
            session.summary().to_string(),
            "Segments: 0\nPending: 1.500000, 2.500000 (Z14.0)\nTotal: 0.00 m"
        );
    }
}
