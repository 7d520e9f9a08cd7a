// src/export/model.rs

use crate::core::calculator::totals::totals;
use crate::models::shift::Shift;
use crate::utils::time::iso_millis;
use serde::Serialize;

/// Flat row exported for every completed shift.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShiftExport {
    #[serde(rename = "EntryID")]
    pub id: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ShiftStart")]
    pub shift_start: String,
    #[serde(rename = "ShiftEnd")]
    pub shift_end: String,
    #[serde(rename = "TotalShiftMinutes")]
    pub total_minutes: i64,
    #[serde(rename = "BreakMinutes")]
    pub break_minutes: i64,
    #[serde(rename = "WorkedMinutes")]
    pub worked_minutes: i64,
    #[serde(rename = "BreakCount")]
    pub break_count: usize,
    #[serde(rename = "Breaks")]
    pub breaks: String,
    #[serde(rename = "HasSignature")]
    pub has_signature: String,
}

/// Header for CSV output, in column order.
pub(crate) const HEADERS: [&str; 12] = [
    "EntryID",
    "Event",
    "Date",
    "Name",
    "ShiftStart",
    "ShiftEnd",
    "TotalShiftMinutes",
    "BreakMinutes",
    "WorkedMinutes",
    "BreakCount",
    "Breaks",
    "HasSignature",
];

impl ShiftExport {
    pub fn from_shift(shift: &Shift) -> Self {
        let t = totals(shift);
        let closed: Vec<String> = shift.closed_breaks().map(|b| b.encode()).collect();

        Self {
            id: shift.id.clone(),
            event: shift.event.clone(),
            date: shift.date_str(),
            name: shift.name.clone(),
            shift_start: iso_millis(shift.start),
            shift_end: shift.end.map(iso_millis).unwrap_or_default(),
            total_minutes: t.total.unwrap_or(0),
            break_minutes: t.breaks,
            worked_minutes: t.worked.unwrap_or(0),
            break_count: closed.len(),
            breaks: closed.join("; "),
            has_signature: if shift.signature.is_some() { "yes" } else { "no" }.to_string(),
        }
    }
}
