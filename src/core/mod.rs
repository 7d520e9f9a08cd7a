pub mod accounting;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod filter;
pub mod log;

pub use accounting::{ShiftAccounting, ShiftCorrection};
pub use filter::ShiftFilter;
