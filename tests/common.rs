#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use pontobot::core::{EventRecorder, FixedClock};
use pontobot::db::{SqliteStore, TimestampStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const SAO_PAULO: Tz = chrono_tz::America::Sao_Paulo;

pub fn bot() -> Command {
    cargo_bin_cmd!("pontobot")
}

/// A fresh SQLite file inside its own temp dir. Keep the TempDir alive for the
/// duration of the test.
pub fn temp_db(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{}_pontobot.sqlite", name));
    (dir, path)
}

pub async fn open_store(path: &PathBuf) -> Arc<dyn TimestampStore> {
    let store = SqliteStore::open(path).expect("open sqlite");
    store.init().await.expect("init schema");
    Arc::new(store)
}

/// Instant at the given São Paulo wall-clock time.
pub fn sao_paulo(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    SAO_PAULO
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

pub fn recorder_at(store: Arc<dyn TimestampStore>, at: DateTime<Utc>) -> EventRecorder {
    EventRecorder::new(store, Arc::new(FixedClock(at)), SAO_PAULO)
}
