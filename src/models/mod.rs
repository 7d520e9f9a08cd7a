pub mod break_entry;
pub mod break_kind;
pub mod shift;
pub mod signature;
