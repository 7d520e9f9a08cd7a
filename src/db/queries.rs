use crate::errors::{AppError, AppResult};
use crate::models::break_entry::Break;
use crate::models::break_kind::BreakKind;
use crate::models::shift::Shift;
use crate::models::signature::Signature;
use crate::ui::messages::warning;
use crate::utils::time::parse_iso;
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SHIFT_COLUMNS: &str = "id, event, name, date, start_at, end_at, signature";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn db_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn read_instant(row: &Row, col: &str) -> Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_iso(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(0, AppError::InvalidTime(s.clone()))),
    }
}

/// Map a `shifts` row (breaks are attached separately).
pub fn map_shift_row(row: &Row) -> Result<Shift> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(3, AppError::InvalidDate(date_str.clone())))?;

    let start = read_instant(row, "start_at")?
        .ok_or_else(|| conversion_error(4, AppError::InvalidTime("missing start".into())))?;

    let signature: Option<Vec<u8>> = row.get("signature")?;

    Ok(Shift {
        id: row.get("id")?,
        event: row.get("event")?,
        name: row.get("name")?,
        date,
        start,
        end: read_instant(row, "end_at")?,
        breaks: Vec::new(),
        signature: signature.and_then(Signature::from_capture),
    })
}

pub fn map_break_row(row: &Row) -> Result<Break> {
    let kind_str: String = row.get("kind")?;
    let kind = BreakKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidBreakKind(kind_str.clone())))?;

    let style: String = row.get("style")?;
    match style.as_str() {
        "timed" => {
            let start = read_instant(row, "start_at")?.ok_or_else(|| {
                conversion_error(4, AppError::InvalidTime("timed break without start".into()))
            })?;
            Ok(Break::Timed {
                kind,
                start,
                end: read_instant(row, "end_at")?,
            })
        }
        "fixed" => Ok(Break::Fixed {
            kind,
            minutes: row.get::<_, Option<i64>>("minutes")?.unwrap_or(0),
        }),
        other => Err(conversion_error(
            3,
            AppError::InvalidBreakKind(format!("Invalid break style: {}", other)),
        )),
    }
}

pub fn load_breaks(conn: &Connection, shift_id: &str) -> Result<Vec<Break>> {
    let mut stmt = conn.prepare_cached(
        "SELECT kind, style, start_at, end_at, minutes
         FROM breaks
         WHERE shift_id = ?1
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map([shift_id], map_break_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn with_breaks(conn: &Connection, mut shift: Shift) -> Result<Shift> {
    shift.breaks = load_breaks(conn, &shift.id)?;
    Ok(shift)
}

/// Load every shift with its breaks. Unreadable rows are reported and
/// skipped, so a damaged record never hides the rest of the store.
pub fn load_all_shifts(conn: &Connection) -> AppResult<Vec<Shift>> {
    let sql = format!("SELECT {SHIFT_COLUMNS} FROM shifts ORDER BY start_at ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_shift_row)?;

    let mut out = Vec::new();
    for r in rows {
        match r.and_then(|s| with_breaks(conn, s)) {
            Ok(shift) => out.push(shift),
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, e)) => {
                warning(format!("Skipping unreadable shift record: {}", e));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(out)
}

pub fn load_shift(conn: &Connection, id: &str) -> AppResult<Option<Shift>> {
    let sql = format!("SELECT {SHIFT_COLUMNS} FROM shifts WHERE id = ?1");
    let shift = conn.query_row(&sql, [id], map_shift_row).optional()?;

    match shift {
        Some(s) => Ok(Some(with_breaks(conn, s)?)),
        None => Ok(None),
    }
}

/// Replace a shift and its break list atomically.
pub fn upsert_shift(conn: &mut Connection, shift: &Shift) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO shifts (id, event, name, date, start_at, end_at, signature, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
         ON CONFLICT(id) DO UPDATE SET
             event = excluded.event,
             name = excluded.name,
             date = excluded.date,
             start_at = excluded.start_at,
             end_at = excluded.end_at,
             signature = excluded.signature,
             updated_at = excluded.updated_at",
        params![
            shift.id,
            shift.event,
            shift.name,
            shift.date_str(),
            db_instant(&shift.start),
            shift.end.as_ref().map(db_instant),
            shift.signature.as_ref().map(|s| s.as_bytes().to_vec()),
            now,
        ],
    )?;

    tx.execute("DELETE FROM breaks WHERE shift_id = ?1", [&shift.id])?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO breaks (shift_id, seq, kind, style, start_at, end_at, minutes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;

        for (seq, b) in shift.breaks.iter().enumerate() {
            match b {
                Break::Timed { kind, start, end } => stmt.execute(params![
                    shift.id,
                    seq as i64,
                    kind.to_db_str(),
                    "timed",
                    db_instant(start),
                    end.as_ref().map(db_instant),
                    Option::<i64>::None,
                ])?,
                Break::Fixed { kind, minutes } => stmt.execute(params![
                    shift.id,
                    seq as i64,
                    kind.to_db_str(),
                    "fixed",
                    Option::<String>::None,
                    Option::<String>::None,
                    minutes,
                ])?,
            };
        }
    }

    tx.commit()?;
    Ok(())
}

/// Delete a shift and its breaks as one unit.
pub fn delete_shift(conn: &mut Connection, id: &str) -> AppResult<bool> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM breaks WHERE shift_id = ?1", [id])?;
    let removed = tx.execute("DELETE FROM shifts WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(removed > 0)
}

/// Suggestion values of a kind ('name' | 'event'), most recently used first.
pub fn load_suggestions(conn: &Connection, kind: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT value FROM suggestions
         WHERE kind = ?1
         ORDER BY last_used DESC, value ASC",
    )?;

    let rows = stmt.query_map([kind], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn remember_suggestion(conn: &Connection, kind: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO suggestions (kind, value, last_used) VALUES (?1, ?2, ?3)
         ON CONFLICT(kind, value) DO UPDATE SET last_used = excluded.last_used",
        params![kind, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}
