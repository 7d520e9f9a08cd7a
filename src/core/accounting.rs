//! Shift lifecycle and time/break accounting.
//!
//! A shift is `Active` (with or without a running break) until `end_shift`
//! sets its end, after which it is `Completed`; nothing ever reopens it.
//! Every operation validates first and persists once, so a failed call
//! leaves the store exactly as it was.

use crate::core::filter::ShiftFilter;
use crate::db::repository::ShiftRepository;
use crate::errors::{AppError, AppResult};
use crate::models::break_entry::Break;
use crate::models::break_kind::BreakKind;
use crate::models::shift::Shift;
use crate::models::signature::Signature;
use crate::ui::messages::warning;
use crate::utils::time::iso_millis;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Corrective edit of a stored shift. `None` keeps the current value.
///
/// A new `date` without a new `start` moves the whole shift (start, end and
/// timed breaks) by the same number of days.
#[derive(Debug, Clone, Default)]
pub struct ShiftCorrection {
    pub event: Option<String>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// 1-based index of a break to drop.
    pub remove_break: Option<usize>,
}

impl ShiftCorrection {
    pub fn is_empty(&self) -> bool {
        self.event.is_none()
            && self.name.is_none()
            && self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.remove_break.is_none()
    }
}

pub struct ShiftAccounting<R: ShiftRepository> {
    repo: R,
}

fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v.to_string())
}

fn end_before_start(start: DateTime<Utc>, end: DateTime<Utc>) -> AppError {
    AppError::EndBeforeStart {
        start: iso_millis(start),
        end: iso_millis(end),
    }
}

/// Timed breaks must lie within `[start, end]` of their shift.
fn check_breaks_inside(shift: &Shift) -> AppResult<()> {
    if let Some(early) = shift
        .breaks
        .iter()
        .filter_map(|b| b.start())
        .find(|s| *s < shift.start)
    {
        return Err(AppError::BreakOutsideShift(
            shift.id.clone(),
            format!("a break starts at {} before the shift", iso_millis(early)),
        ));
    }
    if let Some(end) = shift.end
        && let Some(late) = shift.breaks.iter().filter_map(|b| b.end()).find(|e| *e > end)
    {
        return Err(AppError::BreakOutsideShift(
            shift.id.clone(),
            format!("a break ends at {} after the shift end", iso_millis(late)),
        ));
    }
    Ok(())
}

impl<R: ShiftRepository> ShiftAccounting<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    // ------------------------------------------------
    // Lookups
    // ------------------------------------------------

    pub fn find(&self, id: &str) -> AppResult<Shift> {
        self.repo
            .get(id)?
            .ok_or_else(|| AppError::ShiftNotFound(id.to_string()))
    }

    /// Resolve a full id or a unique prefix of one.
    pub fn resolve_id(&self, id_or_prefix: &str) -> AppResult<String> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(AppError::MissingField("shift id"));
        }
        if self.repo.get(needle)?.is_some() {
            return Ok(needle.to_string());
        }

        let matches: Vec<String> = self
            .repo
            .all()?
            .into_iter()
            .filter(|s| s.id.starts_with(needle))
            .map(|s| s.id)
            .collect();

        match matches.as_slice() {
            [] => Err(AppError::ShiftNotFound(needle.to_string())),
            [only] => Ok(only.clone()),
            _ => Err(AppError::AmbiguousShiftId(needle.to_string())),
        }
    }

    fn find_active(&self, id: &str) -> AppResult<Shift> {
        let shift = self.find(id)?;
        if shift.is_completed() {
            return Err(AppError::ShiftAlreadyEnded(shift.id));
        }
        Ok(shift)
    }

    /// Shifts still in progress, i.e. the drafts persisted across restarts.
    pub fn active_shifts(&self) -> AppResult<Vec<Shift>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|s| s.is_active())
            .collect())
    }

    /// Bring back one draft to continue working on it.
    pub fn resume(&self, id: &str) -> AppResult<Shift> {
        self.find_active(id)
    }

    /// Completed shifts matching the filter, oldest start first.
    pub fn history(&self, filter: &ShiftFilter) -> AppResult<Vec<Shift>> {
        let mut out: Vec<Shift> = self
            .repo
            .all()?
            .into_iter()
            .filter(|s| s.is_completed() && filter.matches(s))
            .collect();
        out.sort_by_key(|s| s.start);
        Ok(out)
    }

    pub fn known_names(&self) -> AppResult<Vec<String>> {
        self.repo.known_names()
    }

    pub fn known_events(&self) -> AppResult<Vec<String>> {
        self.repo.known_events()
    }

    // ------------------------------------------------
    // Lifecycle
    // ------------------------------------------------

    pub fn start_shift(
        &mut self,
        event: &str,
        name: &str,
        date: NaiveDate,
        start: DateTime<Utc>,
    ) -> AppResult<Shift> {
        let event = required(event, "event")?;
        let name = required(name, "staff name")?;

        let shift = Shift::new(event, name, date, start);
        self.repo.upsert(&shift)?;

        // Suggestions are best-effort; the stored shift stands regardless.
        if let Err(e) = self
            .repo
            .remember_event(&shift.event)
            .and_then(|_| self.repo.remember_name(&shift.name))
        {
            warning(format!("Could not update name suggestions: {}", e));
        }

        self.audit(
            "start",
            &shift.id,
            &format!("{} @ {} ({})", shift.name, shift.event, shift.date_str()),
        );
        Ok(shift)
    }

    pub fn start_break(
        &mut self,
        id: &str,
        kind: BreakKind,
        at: DateTime<Utc>,
    ) -> AppResult<Break> {
        let mut shift = self.find_active(id)?;

        if shift.running_break().is_some() {
            return Err(AppError::BreakAlreadyRunning(shift.id));
        }
        if at < shift.start {
            return Err(AppError::BreakOutsideShift(
                shift.id,
                format!("break starts at {} before the shift", iso_millis(at)),
            ));
        }

        let b = Break::timed(kind, at);
        shift.breaks.push(b.clone());
        self.repo.upsert(&shift)?;

        self.audit("break_start", &shift.id, kind.label());
        Ok(b)
    }

    pub fn end_break(&mut self, id: &str, at: DateTime<Utc>) -> AppResult<Break> {
        let mut shift = self.find_active(id)?;

        let idx = shift
            .breaks
            .iter()
            .position(|b| b.is_running())
            .ok_or_else(|| AppError::NoRunningBreak(shift.id.clone()))?;

        if let Break::Timed { start, end, .. } = &mut shift.breaks[idx] {
            if at < *start {
                return Err(end_before_start(*start, at));
            }
            *end = Some(at);
        }
        let ended = shift.breaks[idx].clone();

        self.repo.upsert(&shift)?;

        self.audit(
            "break_end",
            &shift.id,
            &format!("{} ({} min)", ended.kind(), ended.minutes()),
        );
        Ok(ended)
    }

    /// Record a break as a plain duration, without timestamps.
    pub fn add_fixed_break(&mut self, id: &str, kind: BreakKind, minutes: i64) -> AppResult<Break> {
        if minutes < 0 {
            return Err(AppError::InvalidMinutes(minutes.to_string()));
        }
        let mut shift = self.find(id)?;

        let b = Break::fixed(kind, minutes);
        shift.breaks.push(b.clone());
        self.repo.upsert(&shift)?;

        self.audit(
            "break_add",
            &shift.id,
            &format!("{} ({} min)", kind, minutes),
        );
        Ok(b)
    }

    pub fn end_shift(
        &mut self,
        id: &str,
        end: DateTime<Utc>,
        signature: Option<Signature>,
    ) -> AppResult<Shift> {
        let mut shift = self.find_active(id)?;

        if shift.running_break().is_some() {
            return Err(AppError::BreakStillRunning(shift.id));
        }
        if end < shift.start {
            return Err(end_before_start(shift.start, end));
        }

        shift.end = Some(end);
        check_breaks_inside(&shift)?;
        shift.signature = signature;
        self.repo.upsert(&shift)?;

        self.audit(
            "end",
            &shift.id,
            &format!(
                "{} @ {}{}",
                shift.name,
                shift.event,
                if shift.signature.is_some() {
                    " (signed)"
                } else {
                    ""
                }
            ),
        );
        Ok(shift)
    }

    // ------------------------------------------------
    // Corrections
    // ------------------------------------------------

    /// Apply a correction as one change: labels, times and an optional break
    /// removal are validated together and persisted once. The end instant can
    /// only be changed on completed shifts; ending an active shift goes
    /// through `end_shift`.
    pub fn correct(&mut self, id: &str, fix: ShiftCorrection) -> AppResult<Shift> {
        let mut shift = self.find(id)?;

        if fix.end.is_some() && shift.is_active() {
            return Err(AppError::ShiftStillActive(shift.id));
        }

        if let Some(ev) = &fix.event {
            shift.event = required(ev, "event")?;
        }
        if let Some(n) = &fix.name {
            shift.name = required(n, "staff name")?;
        }

        if let Some(d) = fix.date {
            if fix.start.is_none() {
                let delta = Duration::days((d - shift.date).num_days());
                shift.start += delta;
                shift.end = shift.end.map(|e| e + delta);
                for b in &mut shift.breaks {
                    if let Break::Timed { start, end, .. } = b {
                        *start += delta;
                        *end = end.map(|e| e + delta);
                    }
                }
            }
            shift.date = d;
        }
        if let Some(s) = fix.start {
            shift.start = s;
        }
        if let Some(e) = fix.end {
            shift.end = Some(e);
        }

        let removed = match fix.remove_break {
            Some(index) if index == 0 || index > shift.breaks.len() => {
                return Err(AppError::InvalidBreakIndex(index));
            }
            Some(index) => Some((index, shift.breaks.remove(index - 1))),
            None => None,
        };

        if let Some(end) = shift.end
            && end < shift.start
        {
            return Err(end_before_start(shift.start, end));
        }
        check_breaks_inside(&shift)?;

        self.repo.upsert(&shift)?;

        let msg = match removed {
            Some((index, b)) => format!("shift corrected, removed break #{} ({})", index, b.kind()),
            None => "shift corrected".to_string(),
        };
        self.audit("edit", &shift.id, &msg);
        Ok(shift)
    }

    /// Remove the n-th break (1-based), running or not.
    pub fn remove_break(&mut self, id: &str, index: usize) -> AppResult<Break> {
        let mut shift = self.find(id)?;

        if index == 0 || index > shift.breaks.len() {
            return Err(AppError::InvalidBreakIndex(index));
        }

        let removed = shift.breaks.remove(index - 1);
        self.repo.upsert(&shift)?;

        self.audit(
            "edit",
            &shift.id,
            &format!("removed break #{} ({})", index, removed.kind()),
        );
        Ok(removed)
    }

    /// Delete a shift together with its breaks.
    pub fn delete_shift(&mut self, id: &str) -> AppResult<Shift> {
        let shift = self.find(id)?;

        if !self.repo.delete(&shift.id)? {
            return Err(AppError::ShiftNotFound(shift.id));
        }

        self.audit(
            "del",
            &shift.id,
            &format!("{} @ {} ({})", shift.name, shift.event, shift.date_str()),
        );
        Ok(shift)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.repo.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
