//! Login page with email + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::util::validation::{VALIDATION_RULES, validate_field};

/// Per-field messages shown under the login inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn validate_login_form(email: &str, password: &str) -> LoginFormErrors {
    LoginFormErrors {
        email: validate_field(VALIDATION_RULES.email, email).err(),
        password: validate_field(VALIDATION_RULES.password, password).err(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let session = expect_context::<crate::state::session::Session>();
    #[cfg(feature = "csr")]
    let transport = expect_context::<crate::net::transport::Transport>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Errors stay hidden until the first submit attempt.
    let errors = move || {
        if submitted.get() { validate_login_form(&email.get(), &password.get()) } else { LoginFormErrors::default() }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if !validate_login_form(&email_value, &password_value).is_empty() {
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let transport = transport.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&transport, &session, &email_value, &password_value).await {
                    Ok(_) => {
                        info.set(String::new());
                        navigate(crate::router::guard::ROOT_PATH, NavigateOptions::default());
                    }
                    Err(e) => info.set(crate::net::api::login_failed_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || errors().email.is_some()>
                        <p class="login-field-error">{move || errors().email.unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors().password.is_some()>
                        <p class="login-field-error">{move || errors().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
