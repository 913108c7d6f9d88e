//! Timestamp store: schema, backends and the trait the rest of the bot talks to.

pub mod initialize;
pub mod pool;
pub mod postgres;
pub mod queries;

use crate::errors::AppResult;
use crate::models::{ClockEvent, NewClockEvent};
use async_trait::async_trait;

pub use pool::{DatabaseUrl, connect};
pub use postgres::PgStore;
pub use queries::SqliteStore;

/// Append-only storage for clock events.
///
/// Rows are never updated or deleted through this trait. `query` always
/// returns rows in insertion order (ascending id).
#[async_trait]
pub trait TimestampStore: Send + Sync {
    /// Create the table if it does not exist. Safe to call on every start.
    async fn init(&self) -> AppResult<()>;

    /// Persist a new event and return it with the id the store assigned.
    async fn insert(&self, event: NewClockEvent) -> AppResult<ClockEvent>;

    /// All rows, or only the rows of `user_id` when given.
    async fn query(&self, user_id: Option<u64>) -> AppResult<Vec<ClockEvent>>;

    fn backend(&self) -> &'static str;
}
