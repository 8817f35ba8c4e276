//! Top-level screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` picks exactly one of these from the session's current `Screen`.

pub mod feed;
pub mod home;
pub mod login;
pub mod register;
