//! Field-level form validators.
//!
//! Each validator maps one input string to `Ok(())` or a message suitable for
//! display under the field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;

pub type ValidationResult = Result<(), &'static str>;
pub type Validator = fn(&str) -> ValidationResult;

// ECMAScript `\s`, spelled out: `regex`'s Unicode `\s` adds U+0085 and drops U+FEFF.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        let part = format!("[^{BROWSER_WHITESPACE}@]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
    })
}

/// # Errors
///
/// Returns a message if `value` is empty or not shaped like an email address.
pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err("Email is required.");
    }
    if !email_pattern().is_match(value) {
        return Err("Email must be valid.");
    }
    Ok(())
}

/// # Errors
///
/// Returns a message if `value` is empty.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err("Password is required.");
    }
    Ok(())
}

/// Validators applied to each login form field, in order.
#[derive(Clone, Copy, Debug)]
pub struct ValidationRules {
    pub email: &'static [Validator],
    pub password: &'static [Validator],
}

pub const VALIDATION_RULES: ValidationRules =
    ValidationRules { email: &[validate_email], password: &[validate_password] };

/// Run `rules` against `value`, stopping at the first failure.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn validate_field(rules: &[Validator], value: &str) -> ValidationResult {
    rules.iter().try_for_each(|rule| rule(value))
}
