//! Networking modules for the tweet backend's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` reduces failures to a display message,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
