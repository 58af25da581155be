//! Process-wide queue of ephemeral toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components surface every user-facing outcome (validation
//! failures, API errors, success confirmations) through this queue. Toasts
//! are transient and never persisted.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DURATION_MS: u64 = 4000;

/// Severity tag controlling toast presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// CSS modifier class for the toast element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Warning => "toast toast--warning",
            Self::Info => "toast toast--info",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-assigned identifier used for dismissal.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// The toast queue. Ids increase monotonically for the process lifetime.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), severity });
        id
    }

    /// Remove a toast by id. Unknown ids (already expired or dismissed by
    /// hand) are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Show a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, severity: Severity) {
    let mut id = 0;
    toasts.update(|state| id = state.push(message, severity));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
