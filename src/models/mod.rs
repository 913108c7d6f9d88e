pub mod action;
pub mod clock_event;

pub use action::Action;
pub use clock_event::{ClockEvent, NewClockEvent};
