//! Layout for protected pages: sidebar menu plus page content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_menu::NavMenu;
use crate::navigation::menu::menu_for_session;
use crate::router::guard::LOGIN_PATH;
use crate::state::session::Session;

/// Sidebar + content frame. The menu reflects the role stored at render time.
#[component]
pub fn AppShell(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let items = menu_for_session(&session);

    let on_logout = move |_| {
        session.clear();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="app-shell">
            <aside class="app-shell__sidebar">
                <NavMenu items=items/>
                <button class="btn app-shell__logout" on:click=on_logout>
                    "Log out"
                </button>
            </aside>
            <main class="app-shell__content">
                <h1>{title}</h1>
                {children()}
            </main>
        </div>
    }
}
