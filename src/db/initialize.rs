//! Schema for the `pontos` table.
//!
//! Both statements are idempotent: running them against an initialized
//! database leaves existing rows untouched.

pub const SQLITE_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS pontos (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        usuario  TEXT NOT NULL,
        user_id  INTEGER NOT NULL,
        data     TEXT NOT NULL,
        hora     TEXT NOT NULL,
        acao     TEXT NOT NULL CHECK(acao IN ('Entrada','Saída'))
    );
    CREATE INDEX IF NOT EXISTS idx_pontos_user_id ON pontos(user_id);
"#;

// Column types match tables created by earlier deployments of the bot, which
// left every column nullable.
pub const POSTGRES_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS pontos (
        id      SERIAL PRIMARY KEY,
        usuario TEXT,
        user_id BIGINT,
        data    DATE,
        hora    TIME,
        acao    TEXT
    )
"#;

pub const POSTGRES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_pontos_user_id ON pontos(user_id)";

/// Initialize a SQLite connection.
pub fn init_sqlite(conn: &rusqlite::Connection) -> crate::errors::AppResult<()> {
    conn.execute_batch(SQLITE_SCHEMA)?;
    Ok(())
}
