//! Authentication gate evaluated on every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has two regions: the public `/login` page and everything else.
//! [`evaluate`] decides, from the target path and the credential state alone,
//! whether a transition proceeds or is redirected. [`Guarded`] wraps every
//! route view and applies that decision before the view renders, so a
//! redirected route never builds its content.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

/// Credential state derived from the session on each evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn of(session: &Session) -> Self {
        if session.is_authenticated() { Self::Authenticated } else { Self::Unauthenticated }
    }
}

/// What the router should do with a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed,
    RedirectTo(String),
}

/// Decide a transition to `target` given the current credential state.
pub fn evaluate(target: &str, state: AuthState) -> NavigationOutcome {
    let to_login = target == LOGIN_PATH;
    match (to_login, state) {
        (false, AuthState::Unauthenticated) => NavigationOutcome::RedirectTo(LOGIN_PATH.to_owned()),
        (true, AuthState::Authenticated) => NavigationOutcome::RedirectTo(ROOT_PATH.to_owned()),
        _ => NavigationOutcome::Proceed,
    }
}

/// Session-bound guard. Holds no decision state between calls.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Evaluate a transition `from -> to` against the current session.
    pub fn check(&self, to: &str, from: Option<&str>) -> NavigationOutcome {
        let outcome = evaluate(to, AuthState::of(&self.session));
        if let NavigationOutcome::RedirectTo(path) = &outcome {
            match from {
                Some(from) => log::debug!("route guard: {from} -> {to} redirected to {path}"),
                None => log::debug!("route guard: {to} redirected to {path}"),
            }
        }
        outcome
    }
}

/// Render `children` only when the guard lets the current path through.
///
/// The path is read untracked when the route view is built, which happens
/// once per navigation. On `RedirectTo` the children are never built and a
/// `<Redirect>` takes their place. Must be rendered inside a `<Router>`.
#[component]
pub fn Guarded(children: Children) -> impl IntoView {
    let guard = expect_context::<RouteGuard>();
    let to = use_location().pathname.get_untracked();
    match guard.check(&to, None) {
        NavigationOutcome::Proceed => children().into_any(),
        NavigationOutcome::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
