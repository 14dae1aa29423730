use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn email_is_required() {
    assert_eq!(validate_email(""), Err("Email is required."));
}

#[test]
fn email_without_domain_dot_is_invalid() {
    assert_eq!(validate_email("a@b"), Err("Email must be valid."));
}

#[test]
fn well_formed_email_passes() {
    assert_eq!(validate_email("a@b.com"), Ok(()));
    assert_eq!(validate_email("first.last@sub.example.org"), Ok(()));
}

#[test]
fn email_with_whitespace_or_extra_at_is_invalid() {
    assert_eq!(validate_email("a b@c.com"), Err("Email must be valid."));
    assert_eq!(validate_email("a@@b.com"), Err("Email must be valid."));
    assert_eq!(validate_email(" a@b.com"), Err("Email must be valid."));
}

#[test]
fn email_whitespace_matches_browser_semantics() {
    // Byte-order mark and no-break space count as whitespace; NEL does not.
    assert_eq!(validate_email("a\u{FEFF}b@c.com"), Err("Email must be valid."));
    assert_eq!(validate_email("a@b\u{A0}c.com"), Err("Email must be valid."));
    assert_eq!(validate_email("a@b.c\u{3000}om"), Err("Email must be valid."));
    assert_eq!(validate_email("a\u{0085}b@c.com"), Ok(()));
}

// =============================================================
// validate_password
// =============================================================

#[test]
fn password_is_required() {
    assert_eq!(validate_password(""), Err("Password is required."));
}

#[test]
fn any_non_empty_password_passes() {
    assert_eq!(validate_password("x"), Ok(()));
    assert_eq!(validate_password("   "), Ok(()));
}

// =============================================================
// Rules table
// =============================================================

#[test]
fn validate_field_returns_first_failure() {
    assert_eq!(validate_field(VALIDATION_RULES.email, ""), Err("Email is required."));
    assert_eq!(validate_field(VALIDATION_RULES.email, "a@b"), Err("Email must be valid."));
    assert_eq!(validate_field(VALIDATION_RULES.password, ""), Err("Password is required."));
}

#[test]
fn validate_field_with_no_rules_passes() {
    assert_eq!(validate_field(&[], ""), Ok(()));
}
