/// Input events the button understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed at surface coordinates
    PointerDown { x: f32, y: f32 },
    /// Pointer released at surface coordinates
    PointerUp { x: f32, y: f32 },
    /// Non-pointer activation (keyboard or programmatic tap)
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

