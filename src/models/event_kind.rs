/// Kind of a log record. Anything that is not a canonical START/END
/// literal is kept as-is and never contributes to a job summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
    Other(String),
}

impl EventKind {
    /// Build a kind from the raw `type` field: surrounding whitespace is
    /// trimmed and the comparison is case-insensitive.
    pub fn from_raw(s: &str) -> Self {
        let canonical = s.trim().to_uppercase();
        match canonical.as_str() {
            "START" => Self::Start,
            "END" => Self::End,
            _ => Self::Other(canonical),
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EventKind::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, EventKind::End)
    }
}
