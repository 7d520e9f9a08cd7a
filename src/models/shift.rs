use super::{break_entry::Break, signature::Signature};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub id: String,
    pub event: String,               // ⇔ shifts.event
    pub name: String,                // ⇔ shifts.name (staff member)
    pub date: NaiveDate,             // ⇔ shifts.date (TEXT "YYYY-MM-DD")
    pub start: DateTime<Utc>,        // ⇔ shifts.start_at (RFC 3339)
    pub end: Option<DateTime<Utc>>,  // ⇔ shifts.end_at, NULL while active
    pub breaks: Vec<Break>,          // ⇔ breaks rows, ordered by seq
    pub signature: Option<Signature>, // ⇔ shifts.signature (BLOB)
}

impl Shift {
    /// Build a fresh active shift with a newly generated id.
    pub fn new(event: String, name: String, date: NaiveDate, start: DateTime<Utc>) -> Self {
        Self {
            id: new_shift_id(),
            event,
            name,
            date,
            start,
            end: None,
            breaks: Vec::new(),
            signature: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_completed(&self) -> bool {
        self.end.is_some()
    }

    pub fn running_break(&self) -> Option<&Break> {
        self.breaks.iter().find(|b| b.is_running())
    }

    pub fn closed_breaks(&self) -> impl Iterator<Item = &Break> {
        self.breaks.iter().filter(|b| b.is_closed())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// `<epoch-ms>-<random hex>`: unique enough for a single-user store.
pub fn new_shift_id() -> String {
    let suffix: u64 = rand::thread_rng().r#gen();
    format!("{}-{:x}", Utc::now().timestamp_millis(), suffix)
}
