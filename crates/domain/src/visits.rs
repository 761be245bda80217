//! Visit counter — parsing and increment rules for the stored count.
//!
//! The count lives in the preference store as a decimal string. Reading is
//! forgiving: absent or unparsable values count as zero, so a corrupted key
//! resets the counter instead of breaking the footer.

/// Parse a stored visit count. Absent or unparsable values read as zero.
#[must_use]
pub fn parse_count(stored: Option<&str>) -> u64 {
    stored
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// The count after one more visit, saturating at the integer ceiling.
#[must_use]
pub fn next_count(current: u64) -> u64 {
    current.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_stored_decimal_when_valid() {
        assert_eq!(parse_count(Some("41")), 41);
        assert_eq!(parse_count(Some("  7 ")), 7);
        assert_eq!(parse_count(Some("0")), 0);
    }

    #[test]
    fn should_read_zero_when_value_is_missing_or_invalid() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("not-a-number")), 0);
        assert_eq!(parse_count(Some("-3")), 0);
        assert_eq!(parse_count(Some("1.5")), 0);
    }

    #[test]
    fn should_increment_by_one_and_saturate_at_ceiling() {
        assert_eq!(next_count(0), 1);
        assert_eq!(next_count(41), 42);
        assert_eq!(next_count(u64::MAX), u64::MAX);
    }
}
