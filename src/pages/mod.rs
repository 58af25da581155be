//! Page modules for the shell's route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and orchestration (validation, API calls,
//! toasts, redirects) and delegates shared rendering to `components`.

pub mod download;
pub mod generator;
pub mod home;
pub mod login;
pub mod signup;
