//! # Email syntax validation.
//!
//! A syntax check, not a deliverability check: the pattern accepts
//! `local@domain` with exactly one `@`, a dotted domain, and the common
//! local-part characters. Uppercase letters are accepted on both sides.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("hard-coded email pattern must compile")
});

/// Reports whether `email` is syntactically a valid address.
///
/// ## Example
/// ```rust
/// use messenger_utils::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(!is_valid_email("test@@example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_cases() {
        let cases = [
            ("test@example.com", true),
            ("123test@456example.com", true),
            ("test.email@sub.example.com", true),
            ("test@email1.com", true),
            ("TEST@Example.com", true),
            ("TEST+google.com@Example.com", true),
            ("testexample.com", false),
            ("test@", false),
            ("test@@example.com", false),
            ("test @example.com", false),
            ("", false),
        ];

        for (email, want) in cases {
            assert_eq!(is_valid_email(email), want, "email: {email:?}");
        }
    }

    #[test]
    fn test_domain_requires_a_dot() {
        assert!(!is_valid_email("user@localhost"));
        assert!(is_valid_email("user@localhost.net"));
    }

    #[test]
    fn test_whitespace_rejected_anywhere() {
        assert!(!is_valid_email(" test@example.com"));
        assert!(!is_valid_email("test@example.com "));
        assert!(!is_valid_email("test@exam ple.com"));
    }
}
