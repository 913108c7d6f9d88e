//! Unified application error type.
//! Store, recorder, bot and liveness code all return AppError so the
//! command handlers have a single thing to map to user-facing text.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("Corrupted row {id}: {reason}")]
    CorruptedRow { id: i64, reason: String },

    #[error("User id {0} does not fit the store's BIGINT column")]
    UserIdOutOfRange(u64),

    // ---------------------------
    // Chat platform
    // ---------------------------
    #[error("Chat platform error: {0}")]
    Chat(#[from] poise::serenity_prelude::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Missing required configuration: {0} is not set")]
    MissingConfig(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Internal error: {0}")]
    Other(String),
}

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Store,
    Chat,
    Io,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingConfig(_) | AppError::Config(_) => ErrorKind::Config,
            AppError::Sqlite(_)
            | AppError::Postgres(_)
            | AppError::CorruptedRow { .. }
            | AppError::UserIdOutOfRange(_) => ErrorKind::Store,
            AppError::Chat(_) => ErrorKind::Chat,
            AppError::Io(_) => ErrorKind::Io,
            AppError::Join(_) | AppError::Other(_) => ErrorKind::Internal,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
