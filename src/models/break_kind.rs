use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    TenMinutes,
    ThirtyMinutes,
    Meal,
    Custom,
}

impl BreakKind {
    pub const ALL: [BreakKind; 4] = [
        BreakKind::TenMinutes,
        BreakKind::ThirtyMinutes,
        BreakKind::Meal,
        BreakKind::Custom,
    ];

    /// Human label, also used in the DB and in the export break field.
    pub fn label(&self) -> &'static str {
        match self {
            BreakKind::TenMinutes => "10 min",
            BreakKind::ThirtyMinutes => "30 min",
            BreakKind::Meal => "Meal",
            BreakKind::Custom => "Custom",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == s)
    }

    /// Helper: accept the label (any case) or a short code from the CLI.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        match c.as_str() {
            "10" | "10min" | "10 min" => Some(BreakKind::TenMinutes),
            "30" | "30min" | "30 min" => Some(BreakKind::ThirtyMinutes),
            "meal" | "m" => Some(BreakKind::Meal),
            "custom" | "c" => Some(BreakKind::Custom),
            _ => None,
        }
    }

    /// Nominal duration of the timed presets.
    pub fn preset_minutes(&self) -> Option<i64> {
        match self {
            BreakKind::TenMinutes => Some(10),
            BreakKind::ThirtyMinutes => Some(30),
            BreakKind::Meal | BreakKind::Custom => None,
        }
    }
}

impl std::fmt::Display for BreakKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
