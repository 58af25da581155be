//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and shared form controls while
//! reading/writing shared state from Leptos context providers.

pub mod field;
pub mod navbar;
pub mod toast_host;
