//! Picks a store backend from the database URL and opens it.

use super::{PgStore, SqliteStore, TimestampStore};
use crate::errors::{AppError, AppResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    Postgres(String),
    Sqlite(PathBuf),
    SqliteMemory,
}

impl DatabaseUrl {
    pub fn parse(url: &str) -> AppResult<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::MissingConfig("DATABASE_URL"));
        }

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(Self::Postgres(url.to_string()));
        }

        if url == ":memory:" || url == "sqlite::memory:" {
            return Ok(Self::SqliteMemory);
        }

        if let Some(rest) = url.strip_prefix("sqlite:") {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            if path.is_empty() {
                return Err(AppError::Config("sqlite URL has no path".into()));
            }
            return Ok(Self::Sqlite(PathBuf::from(path)));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(AppError::Config(format!(
                "Unsupported database scheme '{}'. Use postgres:// or sqlite://",
                scheme
            )));
        }

        Ok(Self::Sqlite(PathBuf::from(url)))
    }

    /// Printable form with any password replaced by `****`.
    pub fn masked(&self) -> String {
        match self {
            Self::Postgres(url) => mask_password(url),
            Self::Sqlite(path) => format!("sqlite://{}", path.display()),
            Self::SqliteMemory => "sqlite::memory:".to_string(),
        }
    }
}

/// Open the store and make sure its schema exists.
///
/// Any failure here is fatal for the caller: the bot must not start serving
/// commands without a working store.
pub async fn connect(url: &DatabaseUrl) -> AppResult<Arc<dyn TimestampStore>> {
    info!(url = %url.masked(), "Connecting to timestamp store");

    let store: Arc<dyn TimestampStore> = match url {
        DatabaseUrl::Postgres(url) => Arc::new(PgStore::connect(url).await?),
        DatabaseUrl::Sqlite(path) => Arc::new(SqliteStore::open(path)?),
        DatabaseUrl::SqliteMemory => Arc::new(SqliteStore::open_in_memory()?),
    };

    store.init().await?;
    info!(backend = store.backend(), "Timestamp store ready");
    Ok(store)
}

fn mask_password(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let mut out = mask_userinfo(base);
    if let Some(query) = query {
        let params: Vec<String> = query
            .split('&')
            .map(|param| match param.split_once('=') {
                Some((key, _)) if key.eq_ignore_ascii_case("password") => {
                    format!("{}=****", key)
                }
                _ => param.to_string(),
            })
            .collect();
        out.push('?');
        out.push_str(&params.join("&"));
    }
    out
}

fn mask_userinfo(base: &str) -> String {
    let scheme_end = base.find("://").map(|p| p + 3).unwrap_or(0);
    if let Some(at_pos) = base[scheme_end..].rfind('@').map(|p| p + scheme_end)
        && let Some(colon_pos) = base[scheme_end..at_pos].find(':').map(|p| p + scheme_end)
    {
        return format!("{}:****@{}", &base[..colon_pos], &base[at_pos + 1..]);
    }
    base.to_string()
}
