use super::{ClickedPoint, Measurement, MeasurementId};
use geomeasure_types::cartesian::{center, Point2d};
use geomeasure_types::geo::{format_distance, great_circle_distance, GeoPoint2d};
use std::f64::consts::{FRAC_PI_2, PI};

/// Converts geographic points into screen pixels for the current camera state.
///
/// This is implemented by the host map surface, which knows the camera center, zoom, pitch, bearing and viewport
/// size. Return `None` for points that cannot be shown, e.g. behind the horizon of a pitched camera.
pub trait ScreenProjection {
    /// Screen position of the `point` in pixels from the top-left corner.
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d>;
}

impl<T: Fn(&GeoPoint2d) -> Option<Point2d>> ScreenProjection for T {
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d> {
        self(point)
    }
}

/// Line of a measurement with its distance label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureLine {
    /// Id of the measurement. `None` for the preview line to the pointer.
    pub id: Option<MeasurementId>,
    /// First point of the line.
    pub from: GeoPoint2d,
    /// Second point of the line.
    pub to: GeoPoint2d,
    /// Distance between the points in meters.
    pub distance: f64,
    /// Formatted distance.
    pub label: String,
}

impl MeasureLine {
    fn new(id: Option<MeasurementId>, from: GeoPoint2d, to: GeoPoint2d, distance: f64) -> Self {
        Self {
            id,
            from,
            to,
            distance,
            label: format_distance(distance),
        }
    }
}

/// Clicked point to be drawn as a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurePoint {
    /// Measurement the point belongs to. `None` for the pending first point.
    pub measurement: Option<MeasurementId>,
    /// Position of the point in click order, starting from 1.
    pub index: usize,
    /// Location of the point.
    pub position: GeoPoint2d,
    /// Map zoom level at the moment of the click, if known.
    pub zoom: Option<f64>,
}

/// Everything a host needs to draw the measurements of a session, in geographic coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayModel {
    lines: Vec<MeasureLine>,
    points: Vec<MeasurePoint>,
    preview: Option<MeasureLine>,
}

impl DisplayModel {
    pub(super) fn new(
        measurements: &[Measurement],
        pending: Option<ClickedPoint>,
        cursor: Option<GeoPoint2d>,
    ) -> Self {
        let lines = measurements
            .iter()
            .map(|m| MeasureLine::new(Some(m.id()), m.point_a(), m.point_b(), m.distance()))
            .collect();

        let mut points: Vec<MeasurePoint> = measurements
            .iter()
            .flat_map(|m| m.clicks().map(|click| (m.id(), click)))
            .enumerate()
            .map(|(index, (id, click))| MeasurePoint {
                measurement: Some(id),
                index: index + 1,
                position: click.position,
                zoom: click.zoom,
            })
            .collect();

        let mut preview = None;
        if let Some(pending) = pending {
            points.push(MeasurePoint {
                measurement: None,
                index: points.len() + 1,
                position: pending.position,
                zoom: pending.zoom,
            });

            preview = cursor.map(|cursor| {
                MeasureLine::new(
                    None,
                    pending.position,
                    cursor,
                    great_circle_distance(&pending, &cursor),
                )
            });
        }

        Self {
            lines,
            points,
            preview,
        }
    }

    /// Lines of completed measurements in creation order.
    pub fn lines(&self) -> &[MeasureLine] {
        &self.lines
    }

    /// Endpoints of completed measurements followed by the pending point, if any.
    pub fn points(&self) -> &[MeasurePoint] {
        &self.points
    }

    /// Line from the pending point to the pointer.
    pub fn preview(&self) -> Option<&MeasureLine> {
        self.preview.as_ref()
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty()
    }

    /// Converts the model into screen-space primitives.
    ///
    /// Lines with an endpoint that cannot be projected are skipped, as are such points.
    pub fn project(&self, projection: &impl ScreenProjection) -> ScreenPrimitives {
        let segments = self
            .lines
            .iter()
            .chain(self.preview.iter())
            .filter_map(|line| {
                let segment = ScreenSegment::project(line, projection);
                if segment.is_none() {
                    log::trace!("Measurement line {:?} is not visible", line.id);
                }
                segment
            })
            .collect();

        let points = self
            .points
            .iter()
            .filter_map(|point| projection.project(&point.position))
            .collect();

        ScreenPrimitives { segments, points }
    }
}

#[cfg(feature = "geojson")]
impl DisplayModel {
    /// Lines (including the preview) as a GeoJSON feature collection with `[lon, lat]` positions.
    ///
    /// Every feature has `distance` and `label` properties and the measurement id, if there is one.
    pub fn to_geojson_lines(&self) -> geojson::FeatureCollection {
        let features = self
            .lines
            .iter()
            .chain(self.preview.iter())
            .map(|line| {
                let mut properties = geojson::JsonObject::new();
                properties.insert("distance".into(), line.distance.into());
                properties.insert("label".into(), line.label.clone().into());

                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::LineString(vec![
                        position(&line.from),
                        position(&line.to),
                    ]))),
                    id: line
                        .id
                        .map(|id| geojson::feature::Id::String(id.to_string())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// Points as a GeoJSON feature collection with `index` and `zoom` properties.
    pub fn to_geojson_points(&self) -> geojson::FeatureCollection {
        let features = self
            .points
            .iter()
            .map(|point| {
                let mut properties = geojson::JsonObject::new();
                properties.insert("index".into(), point.index.into());
                if let Some(zoom) = point.zoom {
                    properties.insert("zoom".into(), zoom.into());
                }
                if let Some(id) = point.measurement {
                    properties.insert("measurement".into(), id.to_string().into());
                }

                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::Point(position(
                        &point.position,
                    )))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

#[cfg(feature = "geojson")]
fn position(point: &GeoPoint2d) -> geojson::Position {
    use geomeasure_types::geo::GeoPoint;
    vec![point.lon(), point.lat()]
}

/// Measurement line on the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSegment {
    /// Id of the measurement. `None` for the preview line.
    pub id: Option<MeasurementId>,
    /// First point in pixels.
    pub from: Point2d,
    /// Second point in pixels.
    pub to: Point2d,
    /// Anchor of the distance label.
    pub midpoint: Point2d,
    /// Rotation of the label in radians so that it follows the line and is never upside down.
    pub label_angle: f64,
    /// Formatted distance.
    pub label: String,
}

impl ScreenSegment {
    fn project(line: &MeasureLine, projection: &impl ScreenProjection) -> Option<Self> {
        let from = projection.project(&line.from)?;
        let to = projection.project(&line.to)?;
        let direction = to - from;

        let mut label_angle = direction.y.atan2(direction.x);
        if label_angle > FRAC_PI_2 {
            label_angle -= PI;
        } else if label_angle < -FRAC_PI_2 {
            label_angle += PI;
        }

        Some(Self {
            id: line.id,
            from,
            to,
            midpoint: center(&from, &to),
            label_angle,
            label: line.label.clone(),
        })
    }
}

/// Measurements projected to the screen for the current camera state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenPrimitives {
    /// Lines with their labels.
    pub segments: Vec<ScreenSegment>,
    /// Markers of the clicked points.
    pub points: Vec<Point2d>,
}
