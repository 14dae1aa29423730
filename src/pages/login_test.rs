use super::*;

#[test]
fn empty_form_reports_both_required_messages() {
    assert_eq!(
        validate_login_form("", ""),
        LoginFormErrors { email: Some("Email is required."), password: Some("Password is required.") }
    );
}

#[test]
fn malformed_email_is_reported_alone() {
    let errors = validate_login_form("a@b", "secret");
    assert_eq!(errors.email, Some("Email must be valid."));
    assert!(errors.password.is_none());
    assert!(!errors.is_empty());
}

#[test]
fn valid_form_has_no_errors() {
    assert!(validate_login_form("a@b.com", "secret").is_empty());
}

#[test]
fn default_errors_are_empty() {
    assert!(LoginFormErrors::default().is_empty());
}
