// Human-readable time rendering for gate diagnostics
use std::time::{SystemTime, UNIX_EPOCH};

use crate::primitives::Timestamp;

const AGE_UNITS: &[(u64, &str)] = &[
    (31_536_000, "y"),
    (2_592_000, "mo"),
    (604_800, "w"),
    (86_400, "d"),
    (3_600, "h"),
    (60, "m"),
    (1, "s"),
];

/// Elapsed wall-clock time since a UNIX timestamp, largest units first,
/// at most three components. Diagnostic only.
pub fn pretty_age(unix_secs: Timestamp) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    pretty_age_at(unix_secs, now)
}

fn pretty_age_at(unix_secs: u64, now: u64) -> String {
    let mut left = now.saturating_sub(unix_secs);
    let mut out = String::new();
    let mut components = 0;
    for &(span, label) in AGE_UNITS {
        if components == 3 {
            break;
        }
        let count = left / span;
        if count > 0 {
            out.push_str(&count.to_string());
            out.push_str(label);
            left %= span;
            components += 1;
        }
    }
    if out.is_empty() {
        out.push_str("0s");
    }
    out
}

/// A span of seconds rendered as `27h46m40s`.
pub fn pretty_duration(secs: u64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_decomposes_into_units() {
        assert_eq!(pretty_duration(0), "0s");
        assert_eq!(pretty_duration(59), "59s");
        assert_eq!(pretty_duration(60), "1m");
        assert_eq!(pretty_duration(3_601), "1h1s");
        assert_eq!(pretty_duration(100_000), "27h46m40s");
    }

    #[test]
    fn age_caps_at_three_components() {
        // 1y + 1mo + 1w + 1d elapsed: the day is dropped.
        let birth = 0;
        let now = 31_536_000 + 2_592_000 + 604_800 + 86_400;
        assert_eq!(pretty_age_at(birth, now), "1y1mo1w");
    }

    #[test]
    fn age_of_the_present_is_zero() {
        assert_eq!(pretty_age_at(500, 500), "0s");
        // Clocks running backwards saturate rather than underflow.
        assert_eq!(pretty_age_at(1_000, 500), "0s");
    }
}
