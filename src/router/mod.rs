//! Client-side routing helpers.

pub mod guard;
