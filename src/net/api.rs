//! REST API calls made by pages.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `RequestError` so pages can render a message instead of
//! panicking during hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RequestError;
use super::transport::Transport;
use super::types::{LoginRequest, LoginResponse};
use crate::state::session::Session;

pub const LOGIN_ENDPOINT: &str = "/login";

/// Exchange email + password for a token via `POST /login`, then store it.
///
/// # Errors
///
/// Returns the transport error; the session is left untouched on failure.
pub async fn login(
    transport: &Transport,
    session: &Session,
    email: &str,
    password: &str,
) -> Result<LoginResponse, RequestError> {
    let resp: LoginResponse = transport
        .post_json(LOGIN_ENDPOINT, &LoginRequest { email, password })
        .await?;
    remember_login(session, &resp);
    Ok(resp)
}

fn remember_login(session: &Session, resp: &LoginResponse) {
    session.store_credentials(&resp.token, resp.user_type.as_deref());
}

/// User-facing message for a failed login.
pub fn login_failed_message(err: &RequestError) -> String {
    match err {
        RequestError::Status { status: 401 | 403 } => "Invalid email or password.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}
