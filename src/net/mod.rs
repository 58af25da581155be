//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and normalizes failures; `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
