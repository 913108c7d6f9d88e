use super::action::Action;
use chrono::{NaiveDate, NaiveTime};

/// A persisted clock event. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEvent {
    pub id: i64,                   // ⇔ pontos.id (SERIAL / AUTOINCREMENT)
    pub user_display_name: String, // ⇔ pontos.usuario (snapshot at event time)
    pub user_id: u64,              // ⇔ pontos.user_id (BIGINT)
    pub date: NaiveDate,           // ⇔ pontos.data
    pub time: NaiveTime,           // ⇔ pontos.hora (whole seconds)
    pub action: Action,            // ⇔ pontos.acao ('Entrada' | 'Saída')
}

/// A clock event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClockEvent {
    pub user_display_name: String,
    pub user_id: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub action: Action,
}

impl NewClockEvent {
    pub fn new(
        user_display_name: impl Into<String>,
        user_id: u64,
        date: NaiveDate,
        time: NaiveTime,
        action: Action,
    ) -> Self {
        Self {
            user_display_name: user_display_name.into(),
            user_id,
            date,
            time,
            action,
        }
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i64) -> ClockEvent {
        ClockEvent {
            id,
            user_display_name: self.user_display_name,
            user_id: self.user_id,
            date: self.date,
            time: self.time,
            action: self.action,
        }
    }

    /// The user id as stored in the BIGINT column.
    pub fn db_user_id(&self) -> crate::errors::AppResult<i64> {
        to_db_user_id(self.user_id)
    }
}

impl ClockEvent {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

pub fn to_db_user_id(user_id: u64) -> crate::errors::AppResult<i64> {
    i64::try_from(user_id).map_err(|_| crate::errors::AppError::UserIdOutOfRange(user_id))
}
