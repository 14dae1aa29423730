//! Protected section pages reachable from the sidebar.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell title="Home">
            <p class="section-page__lead">"Welcome back. Pick a section from the menu."</p>
        </AppShell>
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <AppShell title="Employees">
            <p class="section-page__lead">"Employee records."</p>
        </AppShell>
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    view! {
        <AppShell title="Jobs">
            <p class="section-page__lead">"Open positions."</p>
        </AppShell>
    }
}

#[component]
pub fn JobApplicationsPage() -> impl IntoView {
    view! {
        <AppShell title="Job Applications">
            <p class="section-page__lead">"Applications received for posted jobs."</p>
        </AppShell>
    }
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! {
        <AppShell title="Companies">
            <p class="section-page__lead">"Registered companies."</p>
        </AppShell>
    }
}
