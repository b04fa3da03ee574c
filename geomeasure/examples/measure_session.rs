//! Replays a short measuring session and prints what a host would show in its side panel.
//!
//! Run with `RUST_LOG=debug` to see the state transitions.

use geomeasure::control::{
    EventDispatcher, EventPropagation, MeasureController, MeasureEvent, MeasureEventHandler,
};
use geomeasure::marker::{grid_points, DiamondSet, DiamondStyle, MarkerGroup};
use geomeasure::measure::ClickedPoint;
use geomeasure::MeasureConfiguration;
use geomeasure_types::geo::{format_coordinate, GeoPoint2d, TileSize};
use geomeasure_types::latlon;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    env_logger::init();

    let markers = DiamondSet::from_groups(&[
        MarkerGroup::new(
            "Mexico",
            grid_points(latlon!(19.4326, -101.5037), 2, 5, 0.15),
            DiamondStyle::default(),
        ),
        MarkerGroup::new(
            "Canada",
            vec![
                latlon!(53.646622, -113.482579),
                latlon!(53.646632, -113.48167),
                latlon!(53.646638, -113.481021),
                latlon!(53.646641, -113.480366),
            ],
            DiamondStyle::default(),
        ),
    ]);
    println!(
        "{} diamonds, {} edges",
        markers.len(),
        markers.edges().count()
    );
    for (marker, heading) in markers.markers().iter().zip(markers.headings()) {
        println!(
            "{:>7} {} heading {heading:.1}, {:.3} px per meter at z16",
            marker.region(),
            format_coordinate(&marker.center()),
            marker.pixel_size(1.0, 16.0, TileSize::Ideal),
        );
    }

    let controller = Rc::new(RefCell::new(MeasureController::new(
        MeasureConfiguration::default(),
    )));
    let mut dispatcher = EventDispatcher::default();
    let handler = controller.clone();
    dispatcher.add_handler(move |event: &MeasureEvent| handler.borrow_mut().handle(event));
    dispatcher.add_handler(|event: &MeasureEvent| {
        if let MeasureEvent::Click(point) = event {
            println!("Map click at {} was not used", format_coordinate(point));
        }
        EventPropagation::Propagate
    });

    let clicks: [GeoPoint2d; 5] = [
        latlon!(53.646622, -113.482579),
        latlon!(53.64669, -113.478403),
        latlon!(19.4326, -101.5037),
        latlon!(-15.7975, -51.9253),
        latlon!(56.1304, -106.3468),
    ];

    dispatcher.handle(MeasureEvent::Click(clicks[0].into()));
    dispatcher.handle(MeasureEvent::Toggle);
    for (click, zoom) in clicks.into_iter().zip([16.0, 16.0, 4.0, 3.5, 3.5]) {
        dispatcher.handle(MeasureEvent::PointerMoved(click));
        if let Some(preview) = controller.borrow().last_preview() {
            println!("Preview: {preview:.2} m");
        }
        dispatcher.handle(MeasureEvent::Click(ClickedPoint::new(click).with_zoom(zoom)));
    }

    println!("{}", controller.borrow().session().summary());
}
