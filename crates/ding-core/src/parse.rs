//! Parser for the compact timer grammar: `<digits><unit>...` then an
//! optional whitespace-separated label.
//!
//! Units are `s`, `m`, `h` (case-insensitive) and groups concatenate without
//! separators, so `1h10m30s` is valid. Repeated units simply sum. The group
//! run must lead the input; anything before it rejects the whole string.

/// Label used when the input carries no text after the duration.
pub const DEFAULT_LABEL: &str = "Timer Done";

/// Result of parsing a raw timer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Total requested delay in seconds.
    pub duration_seconds: u64,
    /// The matched duration substring, e.g. `"1h10m30s"`.
    pub original_time_part: String,
    /// Trimmed remainder, or [`DEFAULT_LABEL`] when absent.
    pub label: String,
}

fn unit_factor(c: u8) -> Option<u64> {
    match c.to_ascii_lowercase() {
        b's' => Some(1),
        b'm' => Some(60),
        b'h' => Some(3600),
        _ => None,
    }
}

/// Parse a raw timer command into duration and label.
///
/// Returns `None` when the input does not start with at least one valid
/// `<digits><unit>` group, when a digit run lacks a unit, or when the label
/// is not separated from the duration by whitespace. This is a strict prefix
/// match, not a search.
pub fn parse_timer_input(input: &str) -> Option<ParsedInput> {
    let input = input.trim();
    let bytes = input.as_bytes();

    let mut pos = 0;
    let mut total: u64 = 0;
    let mut groups = 0;

    loop {
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            // No digits here: the group run ends.
            break;
        }
        // A digit run with no unit (end of input or a non-unit byte) is
        // malformed, not a label.
        let factor = unit_factor(*bytes.get(pos)?)?;
        let value: u64 = input[digits_start..pos].parse().ok()?;
        total = total.checked_add(value.checked_mul(factor)?)?;
        pos += 1;
        groups += 1;
    }

    if groups == 0 {
        return None;
    }

    let (time_part, rest) = input.split_at(pos);
    if !rest.is_empty() && !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let label = rest.trim();
    Some(ParsedInput {
        duration_seconds: total,
        original_time_part: time_part.to_string(),
        label: if label.is_empty() {
            DEFAULT_LABEL.to_string()
        } else {
            label.to_string()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_with_label() {
        let parsed = parse_timer_input("10m Meeting").unwrap();
        assert_eq!(parsed.duration_seconds, 600);
        assert_eq!(parsed.original_time_part, "10m");
        assert_eq!(parsed.label, "Meeting");
    }

    #[test]
    fn test_concatenated_groups() {
        let parsed = parse_timer_input("1h10m30s Deep Work").unwrap();
        assert_eq!(parsed.duration_seconds, 3600 + 600 + 30);
        assert_eq!(parsed.original_time_part, "1h10m30s");
        assert_eq!(parsed.label, "Deep Work");
    }

    #[test]
    fn test_default_label() {
        let parsed = parse_timer_input("5m").unwrap();
        assert_eq!(parsed.duration_seconds, 300);
        assert_eq!(parsed.original_time_part, "5m");
        assert_eq!(parsed.label, DEFAULT_LABEL);
    }

    #[test]
    fn test_units_are_case_insensitive() {
        let parsed = parse_timer_input("1H30M Test").unwrap();
        assert_eq!(parsed.duration_seconds, 3600 + 1800);
        assert_eq!(parsed.original_time_part, "1H30M");
        assert_eq!(parsed.label, "Test");
    }

    #[test]
    fn test_repeated_units_sum() {
        let parsed = parse_timer_input("30m30m").unwrap();
        assert_eq!(parsed.duration_seconds, 3600);
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let parsed = parse_timer_input("0s").unwrap();
        assert_eq!(parsed.duration_seconds, 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let parsed = parse_timer_input("  5m   Tea time  ").unwrap();
        assert_eq!(parsed.original_time_part, "5m");
        assert_eq!(parsed.label, "Tea time");
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(parse_timer_input("invalid").is_none());
    }

    #[test]
    fn test_rejects_time_not_leading() {
        assert!(parse_timer_input("meeting 10m").is_none());
    }

    #[test]
    fn test_rejects_digits_without_unit() {
        assert!(parse_timer_input("10").is_none());
        assert!(parse_timer_input("10m30").is_none());
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert!(parse_timer_input("10d tomorrow").is_none());
    }

    #[test]
    fn test_rejects_label_glued_to_duration() {
        assert!(parse_timer_input("10mMeeting").is_none());
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(parse_timer_input("").is_none());
        assert!(parse_timer_input("   ").is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn factor(unit: char) -> u64 {
            match unit {
                's' | 'S' => 1,
                'm' | 'M' => 60,
                _ => 3600,
            }
        }

        proptest! {
            #[test]
            fn parses_any_valid_group_run(
                groups in prop::collection::vec(
                    (0u64..10_000, prop::sample::select(vec!['s', 'S', 'm', 'M', 'h', 'H'])),
                    1..5,
                ),
                label in proptest::option::of("[a-zA-Z][a-zA-Z0-9 ]{0,20}"),
            ) {
                let time_part: String = groups
                    .iter()
                    .map(|(v, u)| format!("{v}{u}"))
                    .collect();
                let input = match &label {
                    Some(l) => format!("{time_part} {l}"),
                    None => time_part.clone(),
                };

                let parsed = parse_timer_input(&input).unwrap();
                let expected: u64 = groups.iter().map(|(v, u)| v * factor(*u)).sum();
                prop_assert_eq!(parsed.duration_seconds, expected);
                prop_assert_eq!(parsed.original_time_part, time_part);
                let expected_label = match &label {
                    Some(l) if !l.trim().is_empty() => l.trim().to_string(),
                    _ => DEFAULT_LABEL.to_string(),
                };
                prop_assert_eq!(parsed.label, expected_label);
            }
        }
    }
}
