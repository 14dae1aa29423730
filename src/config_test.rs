use super::*;

#[test]
fn default_points_at_local_api() {
    assert_eq!(PortalConfig::default().api_base_url, "http://127.0.0.1:8000/api");
}

#[test]
fn missing_override_uses_default() {
    assert_eq!(PortalConfig::with_base_url(None), PortalConfig::default());
}

#[test]
fn blank_override_uses_default() {
    assert_eq!(PortalConfig::with_base_url(Some("   ")), PortalConfig::default());
}

#[test]
fn override_strips_trailing_slashes() {
    let config = PortalConfig::with_base_url(Some("https://portal.example.com/api//"));
    assert_eq!(config.api_base_url, "https://portal.example.com/api");
}
