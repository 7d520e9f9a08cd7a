use super::break_kind::BreakKind;
use crate::utils::time::{duration_minutes, iso_millis};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A break inside a shift.
///
/// Timer breaks carry their own start/end instants, fixed breaks only a
/// duration. A break record is always exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Break {
    Timed {
        kind: BreakKind,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    },
    Fixed {
        kind: BreakKind,
        minutes: i64,
    },
}

impl Break {
    pub fn timed(kind: BreakKind, start: DateTime<Utc>) -> Self {
        Break::Timed {
            kind,
            start,
            end: None,
        }
    }

    pub fn fixed(kind: BreakKind, minutes: i64) -> Self {
        Break::Fixed { kind, minutes }
    }

    pub fn kind(&self) -> BreakKind {
        match self {
            Break::Timed { kind, .. } | Break::Fixed { kind, .. } => *kind,
        }
    }

    /// Minutes this break removes from worked time. Running breaks count 0.
    pub fn minutes(&self) -> i64 {
        match self {
            Break::Timed {
                start,
                end: Some(end),
                ..
            } => duration_minutes(*start, *end),
            Break::Timed { end: None, .. } => 0,
            Break::Fixed { minutes, .. } => (*minutes).max(0),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Break::Timed { end: None, .. })
    }

    pub fn is_closed(&self) -> bool {
        !self.is_running()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        match self {
            Break::Timed { start, .. } => Some(*start),
            Break::Fixed { .. } => None,
        }
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        match self {
            Break::Timed { end, .. } => *end,
            Break::Fixed { .. } => None,
        }
    }

    /// `type|startISO|endISO|minutes`, the inline encoding used by exports.
    pub fn encode(&self) -> String {
        let start = self.start().map(iso_millis).unwrap_or_default();
        let end = self.end().map(iso_millis).unwrap_or_default();
        format!("{}|{}|{}|{}", self.kind().label(), start, end, self.minutes())
    }
}
