pub mod clock;
pub mod listing;
pub mod recorder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use listing::{Listing, list_events};
pub use recorder::EventRecorder;
