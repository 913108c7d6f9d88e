pub mod messages;

pub use messages::{Field, Reply};
