//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render feed cards, composers, and the toast banner. Cards turn
//! clicks into `FeedAction`s and leave the network work to the feed page.

pub mod comment_card;
pub mod comment_composer;
pub mod toast;
pub mod tweet_card;
pub mod tweet_composer;
