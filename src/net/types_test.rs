use super::*;

#[test]
fn login_request_serializes_both_fields() {
    let body = LoginRequest { email: "a@b.com", password: "pw" };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"email":"a@b.com","password":"pw"}"#);
}

#[test]
fn login_response_reads_role_from_type_field() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t","type":"CA"}"#).unwrap();
    assert_eq!(resp.token, "t");
    assert_eq!(resp.user_type.as_deref(), Some("CA"));
}

#[test]
fn login_response_role_is_optional() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
    assert!(resp.user_type.is_none());
}

#[test]
fn login_response_requires_token() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"type":"CA"}"#).is_err());
}
