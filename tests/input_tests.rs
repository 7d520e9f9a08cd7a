use chrono::{Local, NaiveDate, Timelike};
use shiftsheet::cli::input::{fixed_minutes, parse_kind, resolve_instant};
use shiftsheet::config::Config;
use shiftsheet::models::break_kind::BreakKind;
use shiftsheet::utils::time::{local_instant, parse_time, round_to_quarter_hour};

fn cfg() -> Config {
    Config {
        database: ":memory:".into(),
        round_to_quarter_hour: false,
        ..Config::default()
    }
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn explicit_time_on_given_day() {
    let at = "09:00".to_string();
    let got = resolve_instant(&cfg(), Some(&at), None, june_first(), None).unwrap();
    let want = local_instant(june_first(), parse_time("09:00").unwrap()).unwrap();
    assert_eq!(got, want);
}

#[test]
fn earlier_time_rolls_to_next_day() {
    let start = local_instant(june_first(), parse_time("22:00").unwrap()).unwrap();
    let at = "02:00".to_string();
    let got = resolve_instant(&cfg(), Some(&at), None, june_first(), Some(start)).unwrap();
    assert_eq!((got - start).num_hours(), 4);
}

#[test]
fn explicit_date_never_rolls() {
    let start = local_instant(june_first(), parse_time("22:00").unwrap()).unwrap();
    let at = "02:00".to_string();
    let date = "2025-06-01".to_string();
    let got =
        resolve_instant(&cfg(), Some(&at), Some(&date), june_first(), Some(start)).unwrap();
    assert!(got < start);
}

#[test]
fn date_without_time_uses_the_clock_on_that_date() {
    let date = "2025-06-01".to_string();
    let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let got = resolve_instant(&cfg(), None, Some(&date), today, None).unwrap();
    assert_eq!(got.with_timezone(&Local).date_naive(), june_first());
    assert_eq!(got.with_timezone(&Local).second(), 0);
}

#[test]
fn rounding_applies_to_entered_times() {
    let c = Config {
        round_to_quarter_hour: true,
        ..cfg()
    };
    let at = "09:08".to_string();
    let got = resolve_instant(&c, Some(&at), None, june_first(), None).unwrap();
    let want = local_instant(june_first(), parse_time("09:15").unwrap()).unwrap();
    assert_eq!(got, want);

    let early = local_instant(june_first(), parse_time("09:07").unwrap()).unwrap();
    let floor = local_instant(june_first(), parse_time("09:00").unwrap()).unwrap();
    assert_eq!(round_to_quarter_hour(early), floor);
}

#[test]
fn strict_hh_mm() {
    assert!(parse_time("09:00").is_some());
    assert!(parse_time("9:00").is_none());
    assert!(parse_time("24:00").is_none());
    assert!(parse_time("09:60").is_none());
}

#[test]
fn break_kind_codes() {
    assert_eq!(parse_kind("10").unwrap(), BreakKind::TenMinutes);
    assert_eq!(parse_kind("30 MIN").unwrap(), BreakKind::ThirtyMinutes);
    assert_eq!(parse_kind("Meal").unwrap(), BreakKind::Meal);
    assert_eq!(parse_kind("c").unwrap(), BreakKind::Custom);
    assert!(parse_kind("lunch").is_err());
}

#[test]
fn fixed_minutes_defaults() {
    let c = Config {
        meal_break_minutes: 45,
        ..cfg()
    };
    assert_eq!(fixed_minutes(&c, BreakKind::TenMinutes, None).unwrap(), 10);
    assert_eq!(fixed_minutes(&c, BreakKind::ThirtyMinutes, None).unwrap(), 30);
    assert_eq!(fixed_minutes(&c, BreakKind::Meal, None).unwrap(), 45);
    assert_eq!(fixed_minutes(&c, BreakKind::Meal, Some(20)).unwrap(), 20);
    assert!(fixed_minutes(&c, BreakKind::Custom, None).is_err());
}
