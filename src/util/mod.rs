//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only concerns (storage, timers, native dialogs) live here behind
//! the `csr` feature so page and component logic stays testable natively.

pub mod delay;
pub mod dialog;
pub mod storage;
pub mod timestamp;
