//! Interactive distance measurement.
//!
//! A [`MeasurementSession`] turns a sequence of map clicks into [`Measurement`]s. Every two clicks make one
//! independent segment, so the total distance of a session is the sum of its segment lengths, not the length of a
//! path connecting all clicked points.
//!
//! ```text
//!            start()                register_click(a)
//!   Idle ──────────────▶ Armed ─────────────────────▶ PendingSecondPoint(a)
//!    ▲                     ▲                                   │
//!    │ stop()              └───────────────────────────────────┘
//!    └── (from any state)            register_click(b) -> Measurement(a, b)
//! ```
//!
//! The session only stores geographic coordinates. To show the measurements, take a [`DisplayModel`] from
//! [`MeasurementSession::display_model`] or project them to the screen with
//! [`MeasurementSession::screen_primitives`].

use geomeasure_types::geo::{great_circle_distance, GeoPoint, GeoPoint2d};

mod display;
mod summary;

pub use display::{
    DisplayModel, MeasureLine, MeasurePoint, ScreenPrimitives, ScreenProjection, ScreenSegment,
};
pub use summary::MeasurementSummary;

/// Opaque identifier of a [`Measurement`].
///
/// Ids are unique within the session that created them and are never reused, even after the session is cleared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementId(u64);

impl std::fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Location of a map click together with the map zoom level at the moment of the click.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickedPoint {
    /// Clicked location.
    pub position: GeoPoint2d,
    /// Zoom level of the map, if the host reported it.
    pub zoom: Option<f64>,
}

impl ClickedPoint {
    /// Click at the `position` with unknown zoom level.
    pub fn new(position: GeoPoint2d) -> Self {
        Self {
            position,
            zoom: None,
        }
    }

    /// Sets the zoom level of the map at the moment of the click.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Zoom level as shown next to the coordinates: `Z14.0`, or `Z?` if it is not known.
    pub fn zoom_label(&self) -> String {
        match self.zoom {
            Some(zoom) => format!("Z{zoom:.1}"),
            None => "Z?".to_string(),
        }
    }
}

impl From<GeoPoint2d> for ClickedPoint {
    fn from(position: GeoPoint2d) -> Self {
        Self::new(position)
    }
}

impl GeoPoint for ClickedPoint {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.position.lat()
    }

    fn lon(&self) -> f64 {
        self.position.lon()
    }
}

/// A completed measurement between two clicked points.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    id: MeasurementId,
    point_a: ClickedPoint,
    point_b: ClickedPoint,
    distance: f64,
}

impl Measurement {
    fn new(id: MeasurementId, point_a: ClickedPoint, point_b: ClickedPoint) -> Self {
        Self {
            id,
            point_a,
            point_b,
            distance: great_circle_distance(&point_a, &point_b),
        }
    }

    /// Id of the measurement.
    pub fn id(&self) -> MeasurementId {
        self.id
    }

    /// First clicked point.
    pub fn point_a(&self) -> GeoPoint2d {
        self.point_a.position
    }

    /// Second clicked point.
    pub fn point_b(&self) -> GeoPoint2d {
        self.point_b.position
    }

    /// Both clicks with their zoom levels.
    pub fn clicks(&self) -> [ClickedPoint; 2] {
        [self.point_a, self.point_b]
    }

    /// Great-circle distance between the two points in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// State of a [`MeasurementSession`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionState {
    /// Measuring is off. Clicks are ignored.
    Idle,
    /// Measuring is on and the next click starts a new measurement.
    Armed,
    /// The first point of a measurement is set, the next click completes it.
    PendingSecondPoint(ClickedPoint),
}

/// Click-to-measure state machine.
///
/// All methods are synchronous and never fail. Calls that make no sense in the current state (a click while idle,
/// removing an unknown measurement) are ignored.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    state: SessionState,
    measurements: Vec<Measurement>,
    next_id: u64,
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSession {
    /// Creates a new idle session without measurements.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            measurements: vec![],
            next_id: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true if clicks are being registered (the session is not idle).
    pub fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// First point of the measurement in progress, if any.
    pub fn pending_point(&self) -> Option<GeoPoint2d> {
        self.pending_click().map(|click| click.position)
    }

    /// First click of the measurement in progress with its zoom level, if any.
    pub fn pending_click(&self) -> Option<ClickedPoint> {
        match self.state {
            SessionState::PendingSecondPoint(click) => Some(click),
            _ => None,
        }
    }

    /// Completed measurements in the order they were created.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Returns the measurement with the given id.
    pub fn get(&self, id: MeasurementId) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.id == id)
    }

    /// Turns measuring on. A measurement in progress is discarded.
    ///
    /// The host is expected to switch the pointer to a crosshair while the session is active.
    pub fn start(&mut self) {
        if self.pending_point().is_some() {
            log::debug!("Discarding pending measurement point on restart");
        }

        self.state = SessionState::Armed;
        log::debug!("Measuring started");
    }

    /// Turns measuring off. Completed measurements are kept.
    pub fn stop(&mut self) {
        self.state = SessionState::Idle;
        log::debug!("Measuring stopped");
    }

    /// Registers a click on the map.
    ///
    /// Accepts a bare [`GeoPoint2d`] or a [`ClickedPoint`] carrying the map zoom level. Returns the new measurement
    /// if the click completed one.
    pub fn register_click(&mut self, point: impl Into<ClickedPoint>) -> Option<Measurement> {
        let point = point.into();
        match self.state {
            SessionState::Idle => None,
            SessionState::Armed => {
                log::debug!("First measurement point registered: {point:?}");
                self.state = SessionState::PendingSecondPoint(point);
                None
            }
            SessionState::PendingSecondPoint(first) => {
                let measurement = Measurement::new(self.allocate_id(), first, point);
                log::debug!(
                    "Measurement {} completed: {} m",
                    measurement.id,
                    measurement.distance
                );

                self.measurements.push(measurement);
                self.state = SessionState::Armed;
                Some(measurement)
            }
        }
    }

    /// Distance in meters from the pending first point to the pointer position.
    ///
    /// Returns `None` unless the session waits for the second point.
    pub fn preview_distance(&self, cursor: GeoPoint2d) -> Option<f64> {
        self.pending_point()
            .map(|first| great_circle_distance(&first, &cursor))
    }

    /// Removes the measurement with the given id, returning it.
    ///
    /// Does nothing if there is no such measurement.
    pub fn remove_measurement(&mut self, id: MeasurementId) -> Option<Measurement> {
        let index = self.measurements.iter().position(|m| m.id == id)?;
        log::debug!("Removing measurement {id}");
        Some(self.measurements.remove(index))
    }

    /// Removes all measurements and the pending point. Measuring stays on or off as it was.
    pub fn clear_all(&mut self) {
        self.measurements.clear();
        if let SessionState::PendingSecondPoint(_) = self.state {
            self.state = SessionState::Armed;
        }

        log::debug!("Measurements cleared");
    }

    /// Distances of all measurements and their sum.
    pub fn summary(&self) -> MeasurementSummary {
        MeasurementSummary::new(&self.measurements, self.pending_click())
    }

    /// Geometry of the measurements and the pending point in geographic coordinates.
    pub fn display_model(&self) -> DisplayModel {
        DisplayModel::new(&self.measurements, self.pending_click(), None)
    }

    /// Same as [`display_model`](Self::display_model), with an additional preview line from the pending point to
    /// the `cursor`.
    pub fn display_model_with_cursor(&self, cursor: GeoPoint2d) -> DisplayModel {
        DisplayModel::new(&self.measurements, self.pending_click(), Some(cursor))
    }

    /// Projects the current measurements to the screen.
    ///
    /// Call this every time the camera changes. The session is not modified, so it can be called any number of
    /// times.
    pub fn screen_primitives(&self, projection: &impl ScreenProjection) -> ScreenPrimitives {
        self.display_model().project(projection)
    }

    fn allocate_id(&mut self) -> MeasurementId {
        let id = MeasurementId(self.next_id);
        self.next_id += 1;
        id
    }
}
