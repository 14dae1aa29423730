use super::*;

fn titles(items: &[MenuItem]) -> Vec<&'static str> {
    items.iter().map(|i| i.title).collect()
}

#[test]
fn company_account_menu_excludes_companies() {
    let items = generate_menu_items(Some("CA"));
    assert_eq!(titles(&items), vec!["Home", "Employees", "Jobs", "Job Applications"]);
}

#[test]
fn other_roles_get_companies_second() {
    let items = generate_menu_items(Some("admin"));
    assert_eq!(titles(&items), vec!["Home", "Companies", "Employees", "Jobs", "Job Applications"]);
    assert_eq!(items[1], COMPANIES_ITEM);
}

#[test]
fn missing_role_gets_companies_second() {
    let items = generate_menu_items(None);
    assert_eq!(items.len(), 5);
    assert_eq!(items[1].route_name, "companies");
    assert_eq!(items[1].icon, "tabler-layout-dashboard");
}

#[test]
fn role_comparison_is_case_sensitive() {
    assert_eq!(generate_menu_items(Some("ca")).len(), 5);
}

#[test]
fn every_entry_has_a_route_path() {
    for item in generate_menu_items(None) {
        assert!(item.path().is_some(), "no path for {}", item.route_name);
    }
    assert_eq!(route_path("JobApplication"), Some("/job-applications"));
    assert_eq!(route_path("unknown"), None);
}

#[test]
fn menu_for_session_reads_stored_role() {
    let session = Session::in_memory();
    assert_eq!(menu_for_session(&session).len(), 5);
    session.store_credentials("t", Some("CA"));
    assert_eq!(menu_for_session(&session).len(), 4);
}
