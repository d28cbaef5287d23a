//! Credential validators
//!
//! Both validators are pure: any input, including the empty string, yields a
//! plain `bool`. An invalid value is a normal negative result, not an error.

use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, domain, a literal dot and a 2-64 letter top-level label.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("valid regex literal")
});

/// Allowed password alphabet with a minimum length of 8 and no maximum.
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!@#$%^&*]{8,}$").expect("valid regex literal"));

// The regex crate has no lookahead, so the two "contains" rules are separate
// patterns checked alongside the charset.
static HAS_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("valid regex literal"));
static HAS_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex literal"));

/// Returns true if `candidate` is a well-formed email address.
pub fn validate_email(candidate: &str) -> bool {
    EMAIL.is_match(candidate)
}

/// Returns true if `candidate` is at least 8 characters from
/// `[A-Za-z0-9!@#$%^&*]` and contains a lowercase letter and a digit.
pub fn validate_password(candidate: &str) -> bool {
    PASSWORD_CHARSET.is_match(candidate)
        && HAS_LOWERCASE.is_match(candidate)
        && HAS_DIGIT.is_match(candidate)
}
