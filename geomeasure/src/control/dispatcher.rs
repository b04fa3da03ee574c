use crate::control::{EventPropagation, MeasureEvent, MeasureEventHandler};

/// Passes events to a list of handlers in the order they were added.
///
/// Each handler either lets the event through to the next one or stops it.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn MeasureEventHandler>>,
}

impl EventDispatcher {
    /// Adds a handler to the end of the list.
    pub fn add_handler(&mut self, handler: impl MeasureEventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches the event. Returns [`EventPropagation::Stop`] if one of the handlers stopped it.
    pub fn handle(&mut self, event: MeasureEvent) -> EventPropagation {
        for (index, handler) in self.handlers.iter_mut().enumerate() {
            if handler.handle(&event) == EventPropagation::Stop {
                log::trace!("Event {event:?} stopped by handler {index}");
                return EventPropagation::Stop;
            }
        }

        EventPropagation::Propagate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomeasure_types::latlon;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn stops_at_first_stopping_handler() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut dispatcher = EventDispatcher::default();

        let first = seen.clone();
        dispatcher.add_handler(move |event: &MeasureEvent| {
            first.borrow_mut().push(("first", *event));
            match event {
                MeasureEvent::Click(_) => EventPropagation::Stop,
                _ => EventPropagation::Propagate,
            }
        });

        let second = seen.clone();
        dispatcher.add_handler(move |event: &MeasureEvent| {
            second.borrow_mut().push(("second", *event));
            EventPropagation::Propagate
        });
        assert_eq!(dispatcher.handler_count(), 2);

        let moved = MeasureEvent::PointerMoved(latlon!(1.0, 1.0));
        assert_eq!(dispatcher.handle(moved), EventPropagation::Propagate);

        let click = MeasureEvent::Click(latlon!(1.0, 1.0).into());
        assert_eq!(dispatcher.handle(click), EventPropagation::Stop);

        assert_eq!(
            *seen.borrow(),
            vec![("first", moved), ("second", moved), ("first", click)]
        );
    }
}
