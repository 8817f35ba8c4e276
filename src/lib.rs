//! Browser client for the tweet backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single-page Leptos app: visitors register or log in, then read and act on
//! the shared tweet feed. Everything that touches the browser (fetch, storage,
//! timers, dialogs) sits behind the `csr` feature; the state and request logic
//! underneath compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
