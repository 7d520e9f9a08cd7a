use crate::models::shift::Shift;
use chrono::NaiveDate;

/// Event / date-range selection shared by `list` and `export`.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    /// Matched case-insensitively against the whole event label.
    pub event: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ShiftFilter {
    pub fn new(event: Option<&str>, bounds: Option<(NaiveDate, NaiveDate)>) -> Self {
        let event = event
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        let (from, to) = match bounds {
            Some((f, t)) => (Some(f), Some(t)),
            None => (None, None),
        };
        Self { event, from, to }
    }

    pub fn matches(&self, shift: &Shift) -> bool {
        if let Some(ev) = &self.event
            && shift.event.trim().to_lowercase() != ev.trim().to_lowercase()
        {
            return false;
        }
        if let Some(from) = self.from
            && shift.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && shift.date > to
        {
            return false;
        }
        true
    }
}
