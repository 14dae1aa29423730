//! Sidebar menu entries, filtered by the stored account role.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::state::session::Session;

/// Role value marking a company-account user.
pub const COMPANY_ACCOUNT_ROLE: &str = "CA";

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub route_name: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    /// Path the entry links to, when the route name is known.
    pub fn path(&self) -> Option<&'static str> {
        route_path(self.route_name)
    }
}

const BASE_ITEMS: [MenuItem; 4] = [
    MenuItem { title: "Home", route_name: "index", icon: "tabler-smart-home" },
    MenuItem { title: "Employees", route_name: "employees", icon: "tabler-users" },
    MenuItem { title: "Jobs", route_name: "jobs", icon: "tabler-tie" },
    MenuItem { title: "Job Applications", route_name: "JobApplication", icon: "tabler-file-certificate" },
];

const COMPANIES_ITEM: MenuItem =
    MenuItem { title: "Companies", route_name: "companies", icon: "tabler-layout-dashboard" };

/// Map a named route to its URL path.
pub fn route_path(route_name: &str) -> Option<&'static str> {
    match route_name {
        "index" => Some("/"),
        "employees" => Some("/employees"),
        "jobs" => Some("/jobs"),
        "JobApplication" => Some("/job-applications"),
        "companies" => Some("/companies"),
        _ => None,
    }
}

/// Build the ordered menu for `role`.
///
/// Company accounts do not see "Companies"; everyone else, including users
/// with no stored role, gets it as the second entry.
pub fn generate_menu_items(role: Option<&str>) -> Vec<MenuItem> {
    let mut items = BASE_ITEMS.to_vec();
    if role != Some(COMPANY_ACCOUNT_ROLE) {
        items.insert(1, COMPANIES_ITEM);
    }
    items
}

pub fn menu_for_session(session: &Session) -> Vec<MenuItem> {
    generate_menu_items(session.role().as_deref())
}
