//! Scenarios that go through several modules of the crate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use assert_matches::assert_matches;
use crate::control::{
    CursorHint, EventDispatcher, EventPropagation, MeasureController, MeasureEvent,
    MeasureEventHandler,
};
use crate::measure::{MeasurementSession, ScreenProjection, SessionState};
use crate::MeasureConfiguration;
use geomeasure_types::cartesian::Point2d;
use geomeasure_types::geo::{great_circle_distance, GeoPoint, GeoPoint2d, TileSize};
use geomeasure_types::latlon;
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

/// Web mercator camera looking straight down at `center`.
struct Camera {
    center: GeoPoint2d,
    zoom: f64,
    width: f64,
    height: f64,
}

impl Camera {
    fn world(&self, point: &GeoPoint2d) -> (f64, f64) {
        let size = TileSize::Ideal.pixels() * 2f64.powf(self.zoom);
        let x = (point.lon() + 180.0) / 360.0 * size;
        let y = (1.0 - (PI / 4.0 + point.lat_rad() / 2.0).tan().ln() / PI) / 2.0 * size;
        (x, y)
    }
}

impl ScreenProjection for Camera {
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d> {
        let (x, y) = self.world(point);
        let (cx, cy) = self.world(&self.center);
        let screen = Point2d::new(x - cx + self.width / 2.0, y - cy + self.height / 2.0);

        (screen.x.is_finite() && screen.y.is_finite()).then_some(screen)
    }
}

#[test]
fn measure_two_points() {
    let mut session = MeasurementSession::new();
    session.start();
    session.register_click(latlon!(0.0, 0.0));
    assert_matches!(session.state(), SessionState::PendingSecondPoint(_));

    let preview = session.preview_distance(latlon!(0.0, 1.0)).unwrap();
    assert_relative_eq!(
        preview,
        great_circle_distance(&latlon!(0.0, 0.0), &latlon!(0.0, 1.0))
    );

    let measurement = session.register_click(latlon!(0.0, 1.0)).unwrap();
    assert_eq!(session.state(), SessionState::Armed);
    assert_eq!(session.measurements().len(), 1);
    assert_relative_eq!(measurement.distance(), preview);
}

#[test]
fn clear_after_two_measurements() {
    let mut session = MeasurementSession::new();
    session.start();
    for point in [
        latlon!(0.0, 0.0),
        latlon!(0.0, 1.0),
        latlon!(1.0, 0.0),
        latlon!(1.0, 1.0),
    ] {
        session.register_click(point);
    }
    assert_eq!(session.measurements().len(), 2);

    session.clear_all();
    assert!(session.measurements().is_empty());
    assert!(session.pending_point().is_none());
    assert_eq!(session.state(), SessionState::Armed);
}

#[test]
fn redraw_on_camera_move() {
    let mut session = MeasurementSession::new();
    session.start();
    session.register_click(latlon!(53.646622, -113.482579));
    session.register_click(latlon!(53.64669, -113.478403));

    let mut camera = Camera {
        center: latlon!(53.6467, -113.481),
        zoom: 16.0,
        width: 800.0,
        height: 600.0,
    };
    let before = session.screen_primitives(&camera);
    assert_eq!(before, session.screen_primitives(&camera));

    camera.zoom = 17.0;
    let after = session.screen_primitives(&camera);

    let length = |p: &crate::measure::ScreenPrimitives| {
        let segment = &p.segments[0];
        (segment.to - segment.from).norm()
    };
    assert_relative_eq!(length(&after), 2.0 * length(&before), max_relative = 1e-9);
    assert_eq!(after.segments[0].label, before.segments[0].label);
    assert_eq!(after.segments[0].label, "275.35 m");

    // the line goes east and slightly north, which is up on the screen
    assert!(after.segments[0].label_angle < 0.0);
    assert_abs_diff_eq!(after.segments[0].label_angle, 0.0, epsilon = 0.1);
}

#[test]
fn controller_in_dispatcher() {
    let controller = Rc::new(RefCell::new(MeasureController::new(
        MeasureConfiguration::default(),
    )));
    let coordinates = Rc::new(RefCell::new(None));

    let mut dispatcher = EventDispatcher::default();
    let handler = controller.clone();
    dispatcher.add_handler(move |event: &MeasureEvent| handler.borrow_mut().handle(event));
    let status = coordinates.clone();
    dispatcher.add_handler(move |event: &MeasureEvent| {
        if let MeasureEvent::PointerMoved(point) = event {
            *status.borrow_mut() = Some(*point);
        }
        EventPropagation::Propagate
    });

    assert_eq!(
        dispatcher.handle(MeasureEvent::Toggle),
        EventPropagation::Stop
    );
    assert_eq!(controller.borrow().cursor_hint(), CursorHint::Crosshair);

    dispatcher.handle(MeasureEvent::Click(latlon!(10.0, 10.0).into()));
    dispatcher.handle(MeasureEvent::PointerMoved(latlon!(10.0, 10.5)));
    assert_eq!(*coordinates.borrow(), Some(latlon!(10.0, 10.5)));
    assert!(controller.borrow().last_preview().is_some());

    dispatcher.handle(MeasureEvent::Click(latlon!(10.0, 11.0).into()));
    let summary = controller.borrow().session().summary();
    assert_eq!(summary.count(), 1);
    assert!(summary.describe().starts_with("Segments: 1\n"));

    dispatcher.handle(MeasureEvent::Clear);
    assert_eq!(controller.borrow().cursor_hint(), CursorHint::Default);
    assert_eq!(
        controller.borrow().session().summary().describe(),
        "Click on map to add points"
    );
}
