use crate::format::{format_count, NumberStyle};

/// Why a target edit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// Something other than digits (after removing `,`).
    NotDigits,
    /// Digits, but larger than `u64::MAX`.
    TooLarge,
    /// Empty or zero where a count-to value is required.
    NotPositive,
}

impl std::fmt::Display for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetError::NotDigits => write!(f, "target must contain only digits"),
            TargetError::TooLarge => write!(f, "target is too large (max {})", u64::MAX),
            TargetError::NotPositive => write!(f, "target must be a number above 0"),
        }
    }
}

impl std::error::Error for TargetError {}

/// The "count to" text field.
///
/// Holds the last accepted edit with separators removed. Rejected edits leave
/// the previous text in place, which is how the field refuses a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInput {
    raw: String,
}

impl Default for TargetInput {
    fn default() -> Self {
        Self {
            raw: "100".to_string(),
        }
    }
}

impl TargetInput {
    pub fn new(value: u64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self { raw: String::new() }
    }

    /// Apply an edit as typed (it may still contain the display's commas).
    pub fn accept(&mut self, edit: &str) -> Result<(), TargetError> {
        let stripped: String = edit.chars().filter(|&c| c != ',').collect();
        if stripped.is_empty() {
            self.raw.clear();
            return Ok(());
        }
        if !stripped.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TargetError::NotDigits);
        }
        stripped
            .parse::<u64>()
            .map_err(|_| TargetError::TooLarge)?;
        self.raw = stripped;
        Ok(())
    }

    pub fn value(&self) -> Option<u64> {
        if self.raw.is_empty() {
            None
        } else {
            self.raw.parse().ok()
        }
    }

    pub fn startable(&self) -> bool {
        matches!(self.value(), Some(v) if v > 0)
    }

    /// Text shown in the field. Leading zeros collapse (`007` -> `7`).
    pub fn display(&self, style: NumberStyle) -> String {
        match self.value() {
            Some(v) => format_count(v, style),
            None => String::new(),
        }
    }
}

/// Parse a standalone target (CLI flag, command argument). Commas allowed.
pub fn parse_target(s: &str) -> Result<u64, TargetError> {
    let mut input = TargetInput::empty();
    input.accept(s.trim())?;
    match input.value() {
        Some(v) if v > 0 => Ok(v),
        _ => Err(TargetError::NotPositive),
    }
}
