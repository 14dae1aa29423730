//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the credential slot. It is the only state shared between
//! the transport, the route guard, and the sidebar menu.

pub mod session;
