//! Native browser dialogs used to confirm destructive actions and edit text.
//!
//! Outside the browser `confirm` declines and `prompt` is cancelled, so no
//! destructive call can slip through without a user answer.

/// Ask the user to confirm `message`. `false` when dismissed or unavailable.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Ask the user for text, pre-filled with `default`. `None` when cancelled.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, default);
        None
    }
}
