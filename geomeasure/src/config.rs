/// Configuration of a [`MeasureController`](crate::control::MeasureController).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MeasureConfiguration {
    consume_clicks: bool,
    show_preview: bool,
    stop_on_clear: bool,
}

impl Default for MeasureConfiguration {
    fn default() -> Self {
        Self {
            consume_clicks: true,
            show_preview: true,
            stop_on_clear: true,
        }
    }
}

impl MeasureConfiguration {
    /// Whether map clicks are kept from other handlers while measuring is active.
    pub fn consume_clicks(&self) -> bool {
        self.consume_clicks
    }

    /// Sets whether map clicks are kept from other handlers while measuring is active.
    pub fn with_consume_clicks(mut self, consume: bool) -> Self {
        self.consume_clicks = consume;
        self
    }

    /// Sets whether map clicks are kept from other handlers while measuring is active.
    pub fn set_consume_clicks(&mut self, consume: bool) {
        self.consume_clicks = consume;
    }

    /// Whether the controller computes the live distance from the first point to the pointer.
    ///
    /// When disabled, pointer moves are ignored and the display model never contains a preview line.
    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Sets whether the controller computes the live distance from the first point to the pointer.
    pub fn with_show_preview(mut self, show: bool) -> Self {
        self.show_preview = show;
        self
    }

    /// Sets whether the controller computes the live distance from the first point to the pointer.
    pub fn set_show_preview(&mut self, show: bool) {
        self.show_preview = show;
    }

    /// Whether clearing the measurements also turns measuring off.
    pub fn stop_on_clear(&self) -> bool {
        self.stop_on_clear
    }

    /// Sets whether clearing the measurements also turns measuring off.
    pub fn with_stop_on_clear(mut self, stop: bool) -> Self {
        self.stop_on_clear = stop;
        self
    }

    /// Sets whether clearing the measurements also turns measuring off.
    pub fn set_stop_on_clear(&mut self, stop: bool) {
        self.stop_on_clear = stop;
    }
}
