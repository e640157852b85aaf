//! Human-readable durations

/// Format a second count as `m:ss`.
///
/// Minutes are not wrapped into hours: 3725 seconds renders as `62:05`.
pub fn format_duration(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format the upstream `lengthSeconds` string. Unparseable input counts as zero.
pub fn format_length_seconds(length_seconds: &str) -> String {
    format_duration(length_seconds.trim().parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_padded_seconds() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn test_length_seconds_string() {
        assert_eq!(format_length_seconds("125"), "2:05");
        assert_eq!(format_length_seconds(" 61 "), "1:01");
        assert_eq!(format_length_seconds("live"), "0:00");
    }

    proptest! {
        #[test]
        fn formatted_duration_round_trips(secs in 0u64..10_000_000) {
            let text = format_duration(secs);
            let (mins, rest) = text.split_once(':').unwrap();
            prop_assert_eq!(rest.len(), 2);
            let mins: u64 = mins.parse().unwrap();
            let rest: u64 = rest.parse().unwrap();
            prop_assert!(rest < 60);
            prop_assert_eq!(mins * 60 + rest, secs);
        }
    }
}
