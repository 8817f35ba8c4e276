//! Transient notification state.
//!
//! DESIGN
//! ======
//! At most one notification is visible. Every `show` bumps a sequence number
//! so a dismissal timer belonging to an older notification cannot hide the
//! one that replaced it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    last_id: u64,
}

impl ToastState {
    /// Replace whatever is showing with a new notification; returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.last_id += 1;
        self.current = Some(Toast { id: self.last_id, message: message.into(), kind });
        self.last_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error)
    }

    /// Hide notification `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
