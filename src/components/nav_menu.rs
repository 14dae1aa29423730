//! Vertical list of sidebar links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::navigation::menu::MenuItem;
use crate::router::guard::ROOT_PATH;

/// Sidebar links built from `items`, highlighting the current route.
#[component]
pub fn NavMenu(items: Vec<MenuItem>) -> impl IntoView {
    let pathname = use_location().pathname;

    let links = items
        .into_iter()
        .map(|item| {
            let href = item.path().unwrap_or(ROOT_PATH);
            let is_active = move || pathname.get() == href;
            let icon_class = format!("nav-menu__icon {}", item.icon);

            view! {
                <li class="nav-menu__item">
                    <a href=href class="nav-menu__link" class:nav-menu__link--active=is_active>
                        <i class=icon_class aria-hidden="true"></i>
                        <span>{item.title}</span>
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="nav-menu">{links}</ul> }
}
