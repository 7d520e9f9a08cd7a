use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use shiftsheet::core::calculator::totals::{break_minutes, total_minutes, worked_minutes};
use shiftsheet::core::{ShiftAccounting, ShiftCorrection, ShiftFilter};
use shiftsheet::db::{MemoryStore, ShiftRepository, SqliteStore};
use shiftsheet::errors::AppError;
use shiftsheet::models::break_entry::Break;
use shiftsheet::models::break_kind::BreakKind;
use shiftsheet::models::shift::Shift;
use shiftsheet::models::signature::Signature;

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn memory() -> ShiftAccounting<MemoryStore> {
    ShiftAccounting::new(MemoryStore::new())
}

#[test]
fn full_day_with_short_break() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    acc.start_break(&s.id, BreakKind::TenMinutes, at(12, 0)).unwrap();
    acc.end_break(&s.id, at(12, 10)).unwrap();
    let done = acc.end_shift(&s.id, at(17, 0), None).unwrap();

    assert_eq!(total_minutes(&done), Some(480));
    assert_eq!(break_minutes(&done), 10);
    assert_eq!(worked_minutes(&done), Some(470));
    assert!(done.is_completed());
}

#[test]
fn minutes_round_half_up() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    let end = at(9, 0) + Duration::seconds(90);
    let done = acc.end_shift(&s.id, end, None).unwrap();
    assert_eq!(total_minutes(&done), Some(2));

    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    let end = at(9, 0) + Duration::milliseconds(89_999);
    let done = acc.end_shift(&s.id, end, None).unwrap();
    assert_eq!(total_minutes(&done), Some(1));
}

#[test]
fn worked_minutes_never_negative() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.add_fixed_break(&s.id, BreakKind::Meal, 90).unwrap();
    let done = acc.end_shift(&s.id, at(10, 0), None).unwrap();

    assert_eq!(total_minutes(&done), Some(60));
    assert_eq!(break_minutes(&done), 90);
    assert_eq!(worked_minutes(&done), Some(0));
}

#[test]
fn active_shift_has_no_totals_and_running_break_counts_zero() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::Meal, at(12, 0)).unwrap();

    let s = acc.find(&s.id).unwrap();
    assert_eq!(total_minutes(&s), None);
    assert_eq!(worked_minutes(&s), None);
    assert_eq!(break_minutes(&s), 0);
}

#[test]
fn second_break_while_running_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::TenMinutes, at(10, 0)).unwrap();

    let err = acc
        .start_break(&s.id, BreakKind::Meal, at(10, 5))
        .unwrap_err();
    assert!(matches!(err, AppError::BreakAlreadyRunning(_)));

    let s = acc.find(&s.id).unwrap();
    assert_eq!(s.breaks.len(), 1);
    assert_eq!(s.breaks[0].kind(), BreakKind::TenMinutes);
}

#[test]
fn ending_without_running_break_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    let err = acc.end_break(&s.id, at(10, 0)).unwrap_err();
    assert!(matches!(err, AppError::NoRunningBreak(_)));
    assert_eq!(acc.find(&s.id).unwrap(), s);
}

#[test]
fn break_end_before_its_start_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::TenMinutes, at(10, 0)).unwrap();

    let err = acc.end_break(&s.id, at(9, 55)).unwrap_err();
    assert!(matches!(err, AppError::EndBeforeStart { .. }));
    assert!(acc.find(&s.id).unwrap().running_break().is_some());
}

#[test]
fn end_with_running_break_keeps_shift_active() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::ThirtyMinutes, at(9, 1)).unwrap();

    let err = acc.end_shift(&s.id, at(9, 2), None).unwrap_err();
    assert!(matches!(err, AppError::BreakStillRunning(_)));

    let s = acc.find(&s.id).unwrap();
    assert!(s.is_active());
    assert!(s.running_break().is_some());
}

#[test]
fn end_before_start_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    let err = acc.end_shift(&s.id, at(8, 0), None).unwrap_err();
    assert!(matches!(err, AppError::EndBeforeStart { .. }));
    assert!(acc.find(&s.id).unwrap().is_active());
}

#[test]
fn completed_shift_cannot_be_ended_or_take_timed_breaks() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.end_shift(&s.id, at(17, 0), None).unwrap();

    assert!(matches!(
        acc.end_shift(&s.id, at(18, 0), None).unwrap_err(),
        AppError::ShiftAlreadyEnded(_)
    ));
    assert!(matches!(
        acc.start_break(&s.id, BreakKind::Meal, at(12, 0)).unwrap_err(),
        AppError::ShiftAlreadyEnded(_)
    ));
    assert!(matches!(
        acc.resume(&s.id).unwrap_err(),
        AppError::ShiftAlreadyEnded(_)
    ));
}

#[test]
fn blank_event_or_name_is_rejected() {
    let mut acc = memory();
    assert!(matches!(
        acc.start_shift("  ", "Ada", day(), at(9, 0)).unwrap_err(),
        AppError::MissingField(_)
    ));
    assert!(matches!(
        acc.start_shift("Expo", "", day(), at(9, 0)).unwrap_err(),
        AppError::MissingField(_)
    ));
    assert!(acc.repository().all().unwrap().is_empty());
}

#[test]
fn start_remembers_suggestions() {
    let mut acc = memory();
    acc.start_shift(" Expo ", "Ada", day(), at(9, 0)).unwrap();
    acc.start_shift("Fair", "Ada", day(), at(10, 0)).unwrap();

    assert_eq!(acc.known_names().unwrap(), vec!["Ada".to_string()]);
    assert_eq!(
        acc.known_events().unwrap(),
        vec!["Expo".to_string(), "Fair".to_string()]
    );
}

#[test]
fn signature_is_attached_on_end() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    let sig = Signature::from_capture(vec![0x89, b'P', b'N', b'G']);
    let done = acc.end_shift(&s.id, at(17, 0), sig).unwrap();

    assert_eq!(done.signature.map(|s| s.len()), Some(4));
    assert!(Signature::from_capture(Vec::new()).is_none());
}

#[test]
fn drafts_and_history_are_split_by_state() {
    let mut acc = memory();
    let a = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    let b = acc.start_shift("Expo", "Bob", day(), at(8, 0)).unwrap();
    acc.end_shift(&a.id, at(17, 0), None).unwrap();

    let drafts = acc.active_shifts().unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].id, b.id);

    let done = acc.history(&ShiftFilter::default()).unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, a.id);
}

#[test]
fn history_filters_by_event_and_dates() {
    let mut acc = memory();
    let d2 = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let a = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    let b = acc
        .start_shift("Fair", "Ada", d2, at(9, 0) + Duration::days(30))
        .unwrap();
    acc.end_shift(&a.id, at(17, 0), None).unwrap();
    acc.end_shift(&b.id, at(17, 0) + Duration::days(30), None)
        .unwrap();

    let by_event = acc.history(&ShiftFilter::new(Some("expo"), None)).unwrap();
    assert_eq!(by_event.len(), 1);
    assert_eq!(by_event[0].id, a.id);

    let july = acc.history(&ShiftFilter::new(None, Some((d2, d2)))).unwrap();
    assert_eq!(july.len(), 1);
    assert_eq!(july[0].id, b.id);
}

#[test]
fn corrections_validate_before_saving() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    let err = acc
        .correct(
            &s.id,
            ShiftCorrection {
                end: Some(at(17, 0)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::ShiftStillActive(_)));

    acc.end_shift(&s.id, at(17, 0), None).unwrap();

    let err = acc
        .correct(
            &s.id,
            ShiftCorrection {
                start: Some(at(18, 0)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::EndBeforeStart { .. }));
    assert_eq!(acc.find(&s.id).unwrap().start, at(9, 0));

    let fixed = acc
        .correct(
            &s.id,
            ShiftCorrection {
                start: Some(at(8, 30)),
                name: Some("Ada L.".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(total_minutes(&fixed), Some(510));
    assert_eq!(fixed.name, "Ada L.");
}

#[test]
fn removing_the_running_break_returns_to_working() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::Meal, at(12, 0)).unwrap();

    assert!(matches!(
        acc.remove_break(&s.id, 2).unwrap_err(),
        AppError::InvalidBreakIndex(2)
    ));

    let removed = acc.remove_break(&s.id, 1).unwrap();
    assert!(removed.is_running());
    acc.end_shift(&s.id, at(17, 0), None).unwrap();
}

#[test]
fn prefix_resolves_unique_ids() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    assert_eq!(acc.resolve_id(&s.id).unwrap(), s.id);
    let (prefix, _) = s.id.split_at(s.id.len() - 2);
    assert_eq!(acc.resolve_id(prefix).unwrap(), s.id);
    assert!(matches!(
        acc.resolve_id("nope").unwrap_err(),
        AppError::ShiftNotFound(_)
    ));
}

#[test]
fn sqlite_store_round_trips_mixed_breaks() {
    let mut acc = ShiftAccounting::new(SqliteStore::in_memory().unwrap());
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::TenMinutes, at(10, 0)).unwrap();
    acc.end_break(&s.id, at(10, 10)).unwrap();
    acc.add_fixed_break(&s.id, BreakKind::Meal, 30).unwrap();
    let sig = Signature::from_capture(vec![1, 2, 3]);
    let done = acc.end_shift(&s.id, at(17, 0), sig).unwrap();

    let loaded = acc.find(&s.id).unwrap();
    assert_eq!(loaded, done);
    assert_eq!(
        loaded.breaks,
        vec![
            Break::Timed {
                kind: BreakKind::TenMinutes,
                start: at(10, 0),
                end: Some(at(10, 10)),
            },
            Break::Fixed {
                kind: BreakKind::Meal,
                minutes: 30,
            },
        ]
    );
    assert_eq!(worked_minutes(&loaded), Some(440));
}

#[test]
fn sqlite_delete_removes_breaks_too() {
    let mut acc = ShiftAccounting::new(SqliteStore::in_memory().unwrap());
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.add_fixed_break(&s.id, BreakKind::TenMinutes, 10).unwrap();
    acc.end_shift(&s.id, at(17, 0), None).unwrap();

    acc.delete_shift(&s.id).unwrap();

    assert!(acc.history(&ShiftFilter::default()).unwrap().is_empty());
    assert!(matches!(
        acc.delete_shift(&s.id).unwrap_err(),
        AppError::ShiftNotFound(_)
    ));

    let mut store = acc.into_inner();
    let orphans: i64 = store
        .pool()
        .conn
        .query_row("SELECT COUNT(*) FROM breaks", [], |r| r.get(0))
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn sqlite_skips_corrupt_rows() {
    let mut acc = ShiftAccounting::new(SqliteStore::in_memory().unwrap());
    let good = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    let mut store = acc.into_inner();
    store
        .pool()
        .conn
        .execute(
            "INSERT INTO shifts (id, event, name, date, start_at, created_at, updated_at)
             VALUES ('bad', 'Expo', 'Bob', 'not-a-date', 'garbage', '', '')",
            [],
        )
        .unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, good.id);
}

fn day_with_meal(acc: &mut ShiftAccounting<MemoryStore>) -> Shift {
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::Meal, at(15, 0)).unwrap();
    acc.end_break(&s.id, at(16, 0)).unwrap();
    acc.end_shift(&s.id, at(17, 0), None).unwrap()
}

#[test]
fn break_before_shift_start_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();

    let err = acc
        .start_break(&s.id, BreakKind::TenMinutes, at(8, 30))
        .unwrap_err();
    assert!(matches!(err, AppError::BreakOutsideShift(..)));
    assert!(acc.find(&s.id).unwrap().breaks.is_empty());
}

#[test]
fn end_before_closed_break_end_is_rejected() {
    let mut acc = memory();
    let s = acc.start_shift("Expo", "Ada", day(), at(9, 0)).unwrap();
    acc.start_break(&s.id, BreakKind::Meal, at(15, 0)).unwrap();
    acc.end_break(&s.id, at(16, 0)).unwrap();

    let err = acc.end_shift(&s.id, at(12, 0), None).unwrap_err();
    assert!(matches!(err, AppError::BreakOutsideShift(..)));
    assert!(acc.find(&s.id).unwrap().is_active());
}

#[test]
fn correction_cannot_move_end_before_a_break() {
    let mut acc = memory();
    let done = day_with_meal(&mut acc);

    let err = acc
        .correct(
            &done.id,
            ShiftCorrection {
                end: Some(at(12, 0)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::BreakOutsideShift(..)));
    assert_eq!(acc.find(&done.id).unwrap(), done);
}

#[test]
fn correction_cannot_move_start_after_a_break() {
    let mut acc = memory();
    let done = day_with_meal(&mut acc);

    let err = acc
        .correct(
            &done.id,
            ShiftCorrection {
                start: Some(at(16, 30)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::BreakOutsideShift(..)));
    assert_eq!(acc.find(&done.id).unwrap(), done);
}

#[test]
fn date_change_moves_the_whole_shift() {
    let mut acc = memory();
    let done = day_with_meal(&mut acc);
    let next = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let moved = acc
        .correct(
            &done.id,
            ShiftCorrection {
                date: Some(next),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(moved.date, next);
    assert_eq!(moved.start, at(9, 0) + Duration::days(1));
    assert_eq!(moved.end, Some(at(17, 0) + Duration::days(1)));
    assert_eq!(moved.breaks[0].start(), Some(at(15, 0) + Duration::days(1)));
    assert_eq!(total_minutes(&moved), Some(480));
    assert_eq!(worked_minutes(&moved), Some(420));
}

#[test]
fn break_removal_and_time_fix_apply_together() {
    let mut acc = memory();
    let done = day_with_meal(&mut acc);

    // cutting the end is only valid once the meal break is gone
    let fixed = acc
        .correct(
            &done.id,
            ShiftCorrection {
                end: Some(at(12, 0)),
                remove_break: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(fixed.breaks.is_empty());
    assert_eq!(worked_minutes(&fixed), Some(180));
}

#[test]
fn failed_correction_keeps_breaks() {
    let mut acc = memory();
    let done = day_with_meal(&mut acc);

    let err = acc
        .correct(
            &done.id,
            ShiftCorrection {
                start: Some(at(18, 0)),
                remove_break: Some(1),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::EndBeforeStart { .. }));

    let err = acc
        .correct(
            &done.id,
            ShiftCorrection {
                name: Some("Bob".into()),
                remove_break: Some(3),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidBreakIndex(3)));

    assert_eq!(acc.find(&done.id).unwrap(), done);
}

#[test]
fn shared_prefix_is_ambiguous() {
    let mut acc = memory();
    for id in ["abc-1", "abc-2"] {
        let mut s = Shift::new("Expo".into(), "Ada".into(), day(), at(9, 0));
        s.id = id.to_string();
        acc.repository_mut().upsert(&s).unwrap();
    }

    assert!(matches!(
        acc.resolve_id("abc").unwrap_err(),
        AppError::AmbiguousShiftId(_)
    ));
    assert_eq!(acc.resolve_id("abc-2").unwrap(), "abc-2");
}
