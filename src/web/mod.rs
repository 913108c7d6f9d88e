pub mod liveness;

pub use liveness::{bind, router, serve};
