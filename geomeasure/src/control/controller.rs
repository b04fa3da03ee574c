use crate::config::MeasureConfiguration;
use crate::control::{CursorHint, EventPropagation, MeasureEvent, MeasureEventHandler};
use crate::measure::{DisplayModel, Measurement, MeasurementSession};
use geomeasure_types::geo::GeoPoint2d;

/// Event handler that drives a [`MeasurementSession`].
///
/// Clicks are used only while measuring is on. Button events (`Toggle`, `Start`, `Stop`, `Clear`, `Remove`) always
/// stop the propagation, pointer moves are always propagated so that other handlers can show coordinates.
#[derive(Debug, Default)]
pub struct MeasureController {
    session: MeasurementSession,
    config: MeasureConfiguration,
    cursor: Option<GeoPoint2d>,
    last_preview: Option<f64>,
    last_completed: Option<Measurement>,
}

impl MeasureController {
    /// Creates a new controller with an idle session.
    pub fn new(config: MeasureConfiguration) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Measurement session controlled by this handler.
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    /// Mutable access to the session, e.g. to remove measurements from a side panel.
    pub fn session_mut(&mut self) -> &mut MeasurementSession {
        &mut self.session
    }

    /// Configuration of the controller.
    pub fn config(&self) -> &MeasureConfiguration {
        &self.config
    }

    /// Distance from the pending point to the last pointer position.
    pub fn last_preview(&self) -> Option<f64> {
        self.last_preview
    }

    /// Measurement completed by the last handled click, if that click completed one.
    pub fn last_completed(&self) -> Option<&Measurement> {
        self.last_completed.as_ref()
    }

    /// Pointer style to show over the map.
    pub fn cursor_hint(&self) -> CursorHint {
        if self.session.is_active() {
            CursorHint::Crosshair
        } else {
            CursorHint::Default
        }
    }

    /// Geometry to draw, including the preview line if it is enabled.
    pub fn display_model(&self) -> DisplayModel {
        match self.cursor {
            Some(cursor) if self.config.show_preview() => {
                self.session.display_model_with_cursor(cursor)
            }
            _ => self.session.display_model(),
        }
    }

    fn update_preview(&mut self) {
        self.last_preview = match self.cursor {
            Some(cursor) if self.config.show_preview() => self.session.preview_distance(cursor),
            _ => None,
        };
    }
}

impl MeasureEventHandler for MeasureController {
    fn handle(&mut self, event: &MeasureEvent) -> EventPropagation {
        self.last_completed = None;

        let propagation = match event {
            MeasureEvent::Toggle => {
                if self.session.is_active() {
                    self.session.stop();
                } else {
                    self.session.start();
                }
                EventPropagation::Stop
            }
            MeasureEvent::Start => {
                self.session.start();
                EventPropagation::Stop
            }
            MeasureEvent::Stop => {
                self.session.stop();
                EventPropagation::Stop
            }
            MeasureEvent::Clear => {
                self.session.clear_all();
                if self.config.stop_on_clear() {
                    self.session.stop();
                }
                EventPropagation::Stop
            }
            MeasureEvent::Remove(id) => {
                self.session.remove_measurement(*id);
                EventPropagation::Stop
            }
            MeasureEvent::Click(point) => {
                if !self.session.is_active() {
                    return EventPropagation::Propagate;
                }

                self.last_completed = self.session.register_click(*point);
                if self.config.consume_clicks() {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Propagate
                }
            }
            MeasureEvent::PointerMoved(point) => {
                self.cursor = Some(*point);
                EventPropagation::Propagate
            }
        };

        self.update_preview();
        propagation
    }
}
