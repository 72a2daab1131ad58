//! # Space-joined message rendering.
//!
//! [`format_message`] turns an ordered value sequence into one display
//! string. Each element renders per its [`Value`] rules; elements are
//! joined by a single space with no leading or trailing separator.
//!
//! ## Rules
//! - Empty input yields the empty string.
//! - A non-empty input of `n` elements contains exactly `n - 1` top-level
//!   space separators.
//! - Never fails: unsupported types degrade to the `Unknown type: …`
//!   marker inside their element.

use std::fmt::Write;

use super::value::Value;

/// Renders a value sequence into one space-joined string.
///
/// ## Example
/// ```rust
/// use messenger_utils::{format_message, msg};
///
/// assert_eq!(format_message(&msg!["Hello", "world"]), "Hello world");
/// assert_eq!(format_message(&[]), "");
/// ```
pub fn format_message(values: &[Value]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // fmt::Write into a String cannot fail
        let _ = write!(out, "{value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_message_cases() {
        let cases: Vec<(Vec<Value>, &str)> = vec![
            (vec!["Hello".into(), "world".into()], "Hello world"),
            (
                vec!["The".into(), 42.into(), "answer is".into()],
                "The 42 answer is",
            ),
            (vec![3.14.into()], "Unknown type: f64"),
            (
                vec![
                    "Numbers:".into(),
                    1.into(),
                    2.into(),
                    3.into(),
                    4.into(),
                    5.into(),
                ],
                "Numbers: 1 2 3 4 5",
            ),
        ];

        for (input, want) in cases {
            assert_eq!(format_message(&input), want, "input: {input:?}");
        }
    }

    #[test]
    fn test_format_message_with_timestamp() {
        let at = Utc.with_ymd_and_hms(2023, 5, 5, 12, 0, 0).unwrap();
        let got = format_message(&msg!["Current time:", at]);
        assert_eq!(got, "Current time: 2023-05-05T12:00:00Z");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(format_message(&[]), "");
        assert_eq!(format_message(&msg![]), "");
    }

    #[test]
    fn test_single_element_has_no_separators() {
        assert_eq!(format_message(&msg!["only"]), "only");
    }

    #[test]
    fn test_separator_count_matches_element_count() {
        let values = msg!["a", "b", "c", "d"];
        let rendered = format_message(&values);
        let spaces = rendered.matches(' ').count();
        assert_eq!(spaces, values.len() - 1);
    }

    #[test]
    fn test_inner_join_is_comma_space_not_space() {
        let got = format_message(&msg!["ports:", vec![8080_u16, 8081, 8082]]);
        assert_eq!(got, "ports: 8080, 8081, 8082");
    }

    #[test]
    fn test_bytes_are_decoded_not_listed() {
        let got = format_message(&msg!["payload:", b"ok".to_vec()]);
        assert_eq!(got, "payload: ok");
    }
}
