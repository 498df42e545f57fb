mod animatable_icon;
mod button;
mod event;
mod row;

pub use animatable_icon::AnimatableIcon;
pub use button::{Button, PressCallback};
pub use event::{Event, EventResponse};
pub use row::Row;
