//! Best-effort clipboard access.
//!
//! Copy failures are swallowed: the share link stays visible in a read-only
//! field, so the user can always select it by hand.

/// Write `text` to the system clipboard. Browser-only; no-op on the server.
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
