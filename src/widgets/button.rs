use std::time::Duration;

use crate::geometry::{Color, Rect, Size};
use crate::reactive::ReadSignal;
use crate::renderer::PaintContext;
use crate::widgets::{Event, EventResponse, Row};

/// Callback invoked with the event time when the button is pressed
pub type PressCallback = Box<dyn FnMut(Duration)>;

/// A tappable control wrapping a [`Row`].
///
/// While `enabled` reads false the button swallows nothing and fires nothing:
/// every event is ignored and a press in progress is forgotten. The tint is
/// the same in both states.
pub struct Button {
    content: Row,
    enabled: ReadSignal<bool>,
    tint: Color,
    on_press: Option<PressCallback>,
    pressed: bool,
}

impl Button {
    pub fn new(content: Row, enabled: ReadSignal<bool>) -> Self {
        Self {
            content,
            enabled,
            tint: Color::WHITE,
            on_press: None,
            pressed: false,
        }
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn on_press<F: FnMut(Duration) + 'static>(mut self, callback: F) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn content(&self) -> &Row {
        &self.content
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn bounds(&self) -> Rect {
        self.content.bounds()
    }

    pub fn layout(&mut self, origin: (f32, f32)) -> Size {
        self.content.layout(origin)
    }

    pub fn event(&mut self, event: &Event, now: Duration) -> EventResponse {
        if !self.is_enabled() {
            self.pressed = false;
            return EventResponse::Ignored;
        }

        match *event {
            Event::PointerDown { x, y } if self.bounds().contains(x, y) => {
                self.pressed = true;
                EventResponse::Handled
            }
            Event::PointerUp { x, y } if self.pressed => {
                self.pressed = false;
                if self.bounds().contains(x, y) {
                    self.fire(now);
                }
                EventResponse::Handled
            }
            Event::Activate => {
                self.fire(now);
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    fn fire(&mut self, now: Duration) {
        if let Some(callback) = self.on_press.as_mut() {
            callback(now);
        }
    }

    pub fn update(&mut self, now: Duration) -> bool {
        self.content.update(now)
    }

    pub fn paint(&self, ctx: &mut PaintContext) {
        ctx.set_foreground(self.tint);
        self.content.paint(ctx);
    }
}
