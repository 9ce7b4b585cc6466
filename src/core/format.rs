/// Number rendering for the counter display.
///
/// Integers only; nothing here goes through float formatting.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberStyle {
    /// `1,234,567`
    #[default]
    Grouped,
    /// `1234567`
    Plain,
}

/// Insert a `,` every three digits from the right.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[inline]
pub fn format_count(n: u64, style: NumberStyle) -> String {
    match style {
        NumberStyle::Grouped => group_thousands(n),
        NumberStyle::Plain => n.to_string(),
    }
}
