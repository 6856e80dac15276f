//! Wall-clock timestamp formatting shared by both fixtures.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 / ISO-8601 string.
///
/// Fixed microsecond precision with a `Z` suffix, so rendered timestamps sort
/// lexicographically in the same order they were generated.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_valid_rfc3339() {
        let ts = now_iso8601();
        DateTime::parse_from_rfc3339(&ts).expect("timestamp should parse as RFC 3339");
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn timestamps_are_non_decreasing() {
        let a = now_iso8601();
        let b = now_iso8601();
        // Fixed-width rendering makes string order match time order
        assert!(a <= b);
    }
}
