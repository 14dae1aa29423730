//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` is the only public page. Everything in `sections` renders inside
//! the `AppShell` layout and sits behind the route guard.

pub mod login;
pub mod sections;
