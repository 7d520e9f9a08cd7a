pub mod backup;
pub mod breaks;
pub mod config;
pub mod del;
pub mod edit;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod resume;
pub mod start;
pub mod suggest;

use crate::config::Config;
use crate::core::accounting::ShiftAccounting;
use crate::core::calculator::totals::totals;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::utils::colors::{color_for_status, colorize_optional, paint};
use crate::utils::formatting::{bold, describe_break};
use crate::utils::time::nice_time;

/// Open the configured database behind the accounting core.
pub(crate) fn open(cfg: &Config) -> AppResult<ShiftAccounting<SqliteStore>> {
    Ok(ShiftAccounting::new(SqliteStore::open(&cfg.database)?))
}

/// Multi-line view of one shift with its breaks and totals.
pub(crate) fn print_shift(shift: &Shift) {
    let t = totals(shift);
    let status = if shift.is_active() {
        if shift.running_break().is_some() {
            "on break"
        } else {
            "active"
        }
    } else {
        "completed"
    };

    println!(
        "{}  [{}]",
        bold(&shift.id),
        paint(color_for_status(shift.is_active()), status)
    );
    println!("  Event : {}", shift.event);
    println!("  Name  : {}", shift.name);
    println!("  Date  : {}", shift.date_str());
    println!(
        "  Shift : {} - {}",
        nice_time(shift.start),
        colorize_optional(&shift.end.map(nice_time).unwrap_or_else(|| "--:--".into()))
    );

    if shift.breaks.is_empty() {
        println!("  Breaks: {}", colorize_optional("0 min"));
    } else {
        println!("  Breaks:");
        for (i, b) in shift.breaks.iter().enumerate() {
            println!("    #{:<2} {}", i + 1, describe_break(b));
        }
    }

    match (t.total, t.worked) {
        (Some(total), Some(worked)) => println!(
            "  Total {} min | Breaks {} min | Worked {} min",
            total, t.breaks, worked
        ),
        _ => println!("  Breaks {} min so far", t.breaks),
    }

    if let Some(sig) = &shift.signature {
        println!("  Signed ({} bytes)", sig.len());
    }
}
