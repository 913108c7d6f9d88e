use crate::db::TimestampStore;
use crate::errors::AppResult;
use crate::models::ClockEvent;
use tracing::{debug, error};

/// Result of a listing query. An empty store is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Rows(Vec<ClockEvent>),
}

pub async fn list_events(
    store: &dyn TimestampStore,
    user_id: Option<u64>,
) -> AppResult<Listing> {
    let rows = store.query(user_id).await.map_err(|e| {
        error!(error = %e, ?user_id, "Failed to list clock events");
        e
    })?;

    debug!(rows = rows.len(), ?user_id, "Listed clock events");

    if rows.is_empty() {
        Ok(Listing::Empty)
    } else {
        Ok(Listing::Rows(rows))
    }
}
