//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `router`, `toast`, `document`) so
//! individual components can depend on small focused models. Each store is
//! a plain struct held in an `RwSignal` provided via Leptos context; the
//! structs themselves stay signal-free so their transitions unit-test
//! natively.

pub mod auth;
pub mod document;
pub mod router;
pub mod toast;
