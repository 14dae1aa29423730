//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the protected-page chrome and read the session from
//! Leptos context.

pub mod app_shell;
pub mod nav_menu;
