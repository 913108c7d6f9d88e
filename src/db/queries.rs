//! SQLite backend.

use super::TimestampStore;
use super::initialize::init_sqlite;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::to_db_user_id;
use crate::models::{Action, ClockEvent, NewClockEvent};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A single SQLite connection shared by every handler.
///
/// Statements run on tokio's blocking pool; the mutex serializes them.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Helper to execute a closure with a mutable connection reference.
    async fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| AppError::Other("SQLite connection lock poisoned".into()))?;
            func(&mut guard)
        })
        .await?
    }
}

#[async_trait]
impl TimestampStore for SqliteStore {
    async fn init(&self) -> AppResult<()> {
        self.with_conn(|conn| init_sqlite(conn)).await
    }

    async fn insert(&self, event: NewClockEvent) -> AppResult<ClockEvent> {
        let user_id = event.db_user_id()?;
        self.with_conn(move |conn| {
            insert_event(conn, &event, user_id)?;
            let id = conn.last_insert_rowid();
            Ok(event.with_id(id))
        })
        .await
    }

    async fn query(&self, user_id: Option<u64>) -> AppResult<Vec<ClockEvent>> {
        let filter = user_id.map(to_db_user_id).transpose()?;
        self.with_conn(move |conn| load_events(conn, filter)).await
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

pub fn insert_event(conn: &Connection, ev: &NewClockEvent, user_id: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO pontos (usuario, user_id, data, hora, acao)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.user_display_name,
            user_id,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.time.format("%H:%M:%S").to_string(),
            ev.action.to_db_str(),
        ],
    )?;
    Ok(())
}

pub fn load_events(conn: &Connection, user_id: Option<i64>) -> AppResult<Vec<ClockEvent>> {
    let mut out = Vec::new();

    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare(
                "SELECT id, usuario, user_id, data, hora, acao FROM pontos
                 WHERE user_id = ?1
                 ORDER BY id ASC",
            )?;
            for r in stmt.query_map([uid], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, usuario, user_id, data, hora, acao FROM pontos
                 ORDER BY id ASC",
            )?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn map_row(row: &Row) -> rusqlite::Result<ClockEvent> {
    let id: i64 = row.get("id")?;
    let corrupted = |reason: String| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::CorruptedRow { id, reason }),
        )
    };

    let date_str: String = row.get("data")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| corrupted(format!("invalid date '{}'", date_str)))?;

    let time_str: String = row.get("hora")?;
    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S")
        .map_err(|_| corrupted(format!("invalid time '{}'", time_str)))?;

    let action_str: String = row.get("acao")?;
    let action = Action::from_db_str(&action_str)
        .ok_or_else(|| corrupted(format!("invalid action '{}'", action_str)))?;

    let raw_user_id: i64 = row.get("user_id")?;
    let user_id = u64::try_from(raw_user_id)
        .map_err(|_| corrupted(format!("negative user id {}", raw_user_id)))?;

    Ok(ClockEvent {
        id,
        user_display_name: row.get("usuario")?,
        user_id,
        date,
        time,
        action,
    })
}
