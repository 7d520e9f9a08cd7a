use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Applied migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_shifts_and_breaks",
        description: "Created shifts and breaks tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id          TEXT PRIMARY KEY,
            event       TEXT NOT NULL,
            name        TEXT NOT NULL,
            date        TEXT NOT NULL,
            start_at    TEXT NOT NULL,
            end_at      TEXT,
            signature   BLOB,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS breaks (
            shift_id  TEXT NOT NULL REFERENCES shifts(id) ON DELETE CASCADE,
            seq       INTEGER NOT NULL,
            kind      TEXT NOT NULL,
            style     TEXT NOT NULL CHECK(style IN ('timed','fixed')),
            start_at  TEXT,
            end_at    TEXT,
            minutes   INTEGER,
            PRIMARY KEY (shift_id, seq)
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(date);
        CREATE INDEX IF NOT EXISTS idx_shifts_start ON shifts(start_at);
        "#,
    },
    Migration {
        version: "20250615_0002_create_suggestions",
        description: "Created suggestions table for staff and event names",
        sql: r#"
        CREATE TABLE IF NOT EXISTS suggestions (
            kind       TEXT NOT NULL CHECK(kind IN ('name','event')),
            value      TEXT NOT NULL,
            last_used  TEXT NOT NULL,
            PRIMARY KEY (kind, value)
        );

        INSERT OR IGNORE INTO suggestions (kind, value, last_used)
            SELECT 'name', name, MAX(start_at) FROM shifts GROUP BY name;
        INSERT OR IGNORE INTO suggestions (kind, value, last_used)
            SELECT 'event', event, MAX(start_at) FROM shifts GROUP BY event;
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet recorded in the `log` table.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each inside its own
/// transaction together with its `migration_applied` marker.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), m.version, m.description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
