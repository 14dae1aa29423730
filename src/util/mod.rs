//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure logic that pages call into, keeping it testable
//! without a browser.

pub mod validation;
