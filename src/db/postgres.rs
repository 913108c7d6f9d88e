//! PostgreSQL backend.

use super::TimestampStore;
use super::initialize::{POSTGRES_INDEX, POSTGRES_SCHEMA};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::to_db_user_id;
use crate::models::{Action, ClockEvent, NewClockEvent};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use tracing::info;

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;

        info!(max_connections = MAX_CONNECTIONS, "Connected to PostgreSQL");
        Ok(Self { pool })
    }
}

#[async_trait]
impl TimestampStore for PgStore {
    async fn init(&self) -> AppResult<()> {
        sqlx::query(POSTGRES_SCHEMA).execute(&self.pool).await?;
        sqlx::query(POSTGRES_INDEX).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, event: NewClockEvent) -> AppResult<ClockEvent> {
        let user_id = event.db_user_id()?;
        let row = sqlx::query(
            "INSERT INTO pontos (usuario, user_id, data, hora, acao)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&event.user_display_name)
        .bind(user_id)
        .bind(event.date)
        .bind(event.time)
        .bind(event.action.to_db_str())
        .fetch_one(&self.pool)
        .await?;

        let id: i32 = row.try_get("id")?;
        Ok(event.with_id(i64::from(id)))
    }

    async fn query(&self, user_id: Option<u64>) -> AppResult<Vec<ClockEvent>> {
        let rows = match user_id {
            Some(uid) => {
                sqlx::query(
                    "SELECT id, usuario, user_id, data, hora, acao FROM pontos
                     WHERE user_id = $1
                     ORDER BY id ASC",
                )
                .bind(to_db_user_id(uid)?)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, usuario, user_id, data, hora, acao FROM pontos
                     ORDER BY id ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_row).collect()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn map_row(row: &PgRow) -> AppResult<ClockEvent> {
    let id = i64::from(row.try_get::<i32, _>("id")?);
    let missing = |column: &str| AppError::CorruptedRow {
        id,
        reason: format!("{} is NULL", column),
    };

    let user_display_name: String = row
        .try_get::<Option<String>, _>("usuario")?
        .ok_or_else(|| missing("usuario"))?;
    let raw_user_id: i64 = row
        .try_get::<Option<i64>, _>("user_id")?
        .ok_or_else(|| missing("user_id"))?;
    let user_id = u64::try_from(raw_user_id).map_err(|_| AppError::CorruptedRow {
        id,
        reason: format!("negative user id {}", raw_user_id),
    })?;
    let date: NaiveDate = row
        .try_get::<Option<NaiveDate>, _>("data")?
        .ok_or_else(|| missing("data"))?;
    let time: NaiveTime = row
        .try_get::<Option<NaiveTime>, _>("hora")?
        .ok_or_else(|| missing("hora"))?;
    let action_str: String = row
        .try_get::<Option<String>, _>("acao")?
        .ok_or_else(|| missing("acao"))?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| AppError::CorruptedRow {
        id,
        reason: format!("invalid action '{}'", action_str),
    })?;

    Ok(ClockEvent {
        id,
        user_display_name,
        user_id,
        date,
        time,
        action,
    })
}
