//! Writes clock events into the store.

use crate::core::clock::Clock;
use crate::db::TimestampStore;
use crate::errors::AppResult;
use crate::models::{Action, ClockEvent, NewClockEvent};
use crate::utils::time::local_stamp;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info};

/// Stamps events with the current local time and persists them.
///
/// A failed insert is logged and returned to the caller; there is no retry.
#[derive(Clone)]
pub struct EventRecorder {
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl EventRecorder {
    pub fn new(store: Arc<dyn TimestampStore>, clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self { store, clock, tz }
    }

    pub fn store(&self) -> &Arc<dyn TimestampStore> {
        &self.store
    }

    /// Build an event for `action` at the current instant.
    pub fn stamp(&self, display_name: &str, user_id: u64, action: Action) -> NewClockEvent {
        let (date, time) = local_stamp(self.clock.now(), self.tz);
        NewClockEvent::new(display_name, user_id, date, time, action)
    }

    pub async fn record(&self, event: NewClockEvent) -> AppResult<ClockEvent> {
        match self.store.insert(event).await {
            Ok(saved) => {
                info!(
                    id = saved.id,
                    user_id = saved.user_id,
                    action = saved.action.to_db_str(),
                    "{} recorded for {} at {}",
                    saved.action.to_db_str(),
                    saved.user_display_name,
                    saved.time_str()
                );
                Ok(saved)
            }
            Err(e) => {
                error!(error = %e, "Failed to record clock event");
                Err(e)
            }
        }
    }

    /// Stamp and record in one step. This is what the chat commands call.
    pub async fn punch(
        &self,
        display_name: &str,
        user_id: u64,
        action: Action,
    ) -> AppResult<ClockEvent> {
        let event = self.stamp(display_name, user_id, action);
        self.record(event).await
    }
}
