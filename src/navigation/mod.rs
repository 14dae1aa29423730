//! Vertical sidebar navigation.

pub mod menu;
