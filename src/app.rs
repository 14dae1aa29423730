//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PortalConfig;
use crate::net::transport::Transport;
use crate::pages::login::LoginPage;
use crate::pages::sections::{CompaniesPage, EmployeesPage, HomePage, JobApplicationsPage, JobsPage};
use crate::router::guard::{Guarded, RouteGuard};
use crate::state::session::Session;

/// Build the session-bound transport and guard, and provide all three as context.
pub fn provide_portal_context(config: &PortalConfig, session: Session) {
    let transport = Transport::new(config, session.clone());
    let guard = RouteGuard::new(session.clone());

    provide_context(session);
    provide_context(transport);
    provide_context(guard);
}

/// Root application component, backed by browser `localStorage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_portal_context(&PortalConfig::from_build_env(), Session::browser());

    view! {
        <Title text="Portal"/>
        <PortalRouter/>
    }
}

/// Route table. Every route view, including the fallback, sits behind [`Guarded`].
#[component]
pub fn PortalRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Guarded>"Page not found."</Guarded> }>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                <Route path=StaticSegment("employees") view=|| view! { <Guarded><EmployeesPage/></Guarded> }/>
                <Route path=StaticSegment("jobs") view=|| view! { <Guarded><JobsPage/></Guarded> }/>
                <Route
                    path=StaticSegment("job-applications")
                    view=|| view! { <Guarded><JobApplicationsPage/></Guarded> }
                />
                <Route path=StaticSegment("companies") view=|| view! { <Guarded><CompaniesPage/></Guarded> }/>
            </Routes>
        </Router>
    }
}
