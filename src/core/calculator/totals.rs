//! Minute accounting for a single shift.

use crate::models::shift::Shift;
use crate::utils::time::duration_minutes;

/// Sum of closed breaks. Running breaks contribute nothing.
pub fn break_minutes(shift: &Shift) -> i64 {
    shift.breaks.iter().map(|b| b.minutes()).sum()
}

/// Whole minutes between start and end; `None` while the shift is active.
pub fn total_minutes(shift: &Shift) -> Option<i64> {
    shift.end.map(|end| duration_minutes(shift.start, end))
}

/// Total minus breaks, clamped at zero; `None` while the shift is active.
pub fn worked_minutes(shift: &Shift) -> Option<i64> {
    total_minutes(shift).map(|total| (total - break_minutes(shift)).max(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTotals {
    pub total: Option<i64>,
    pub breaks: i64,
    pub worked: Option<i64>,
}

pub fn totals(shift: &Shift) -> ShiftTotals {
    ShiftTotals {
        total: total_minutes(shift),
        breaks: break_minutes(shift),
        worked: worked_minutes(shift),
    }
}
