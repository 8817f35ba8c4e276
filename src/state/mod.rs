//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `feed`) so each screen
//! depends only on the small model it renders.

pub mod feed;
pub mod session;
pub mod toast;
