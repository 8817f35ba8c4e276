//! Feed state and user-action dispatch planning.
//!
//! DESIGN
//! ======
//! Every user action on the feed is a `FeedAction`. Planning an action is a
//! pure function of the action, the current tweets, and the current
//! username, so the create-vs-delete decision for likes and retweets and the
//! confirmation gate for deletes are testable without a browser.
//!
//! After a successful mutation the page re-fetches the whole feed. Fetches
//! take a generation ticket and only the most recent ticket may replace the
//! tweet list, so an older response that resolves late is discarded.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::cmp::Reverse;

use crate::net::api::ApiRequest;
use crate::net::error::ApiError;
use crate::net::types::{Authored, Like, Retweet, Tweet};
use crate::util::timestamp;

/// A user action dispatched from a tweet or comment card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedAction {
    /// Like the tweet, or remove the current user's like.
    Like { tweet_id: String },
    /// Retweet the tweet, or remove the current user's retweet.
    Retweet { tweet_id: String },
    Comment { tweet_id: String, content: String },
    EditComment { comment_id: String, content: String },
    DeleteComment { comment_id: String },
    DeleteTweet { tweet_id: String },
}

impl FeedAction {
    /// Question the user must accept before the action is sent.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::DeleteTweet { .. } => Some("Delete this tweet?"),
            Self::DeleteComment { .. } => Some("Delete this comment?"),
            Self::Like { .. } | Self::Retweet { .. } | Self::Comment { .. } | Self::EditComment { .. } => None,
        }
    }

    /// Notification text when the backend gives no message of its own.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Like { .. } => "Could not update like.",
            Self::Retweet { .. } => "Could not update retweet.",
            Self::Comment { .. } => "Could not post comment.",
            Self::EditComment { .. } => "Could not update comment.",
            Self::DeleteComment { .. } => "Could not delete comment.",
            Self::DeleteTweet { .. } => "Could not delete tweet.",
        }
    }
}

/// The current user's like on `tweet`, if any.
pub fn like_by<'a>(tweet: &'a Tweet, username: &str) -> Option<&'a Like> {
    tweet.likes.iter().find(|like| like.is_by(username))
}

/// The current user's retweet of `tweet`, if any.
pub fn retweet_by<'a>(tweet: &'a Tweet, username: &str) -> Option<&'a Retweet> {
    tweet.retweets.iter().find(|retweet| retweet.is_by(username))
}

/// Map an action to the backend call it needs, without asking the user.
///
/// Returns `None` when the action has nothing to send: blank text, or a
/// target tweet or comment that is no longer in the feed.
pub fn resolve(action: &FeedAction, tweets: &[Tweet], username: &str) -> Option<ApiRequest> {
    let find_tweet = |id: &str| tweets.iter().find(|tweet| tweet.id == id);
    let has_comment = |id: &str| tweets.iter().flat_map(|tweet| &tweet.comments).any(|c| c.id == id);
    match action {
        FeedAction::Like { tweet_id } => {
            let tweet = find_tweet(tweet_id)?;
            Some(match like_by(tweet, username) {
                Some(like) => ApiRequest::Unlike { like_id: like.id.clone() },
                None => ApiRequest::Like { tweet_id: tweet.id.clone() },
            })
        }
        FeedAction::Retweet { tweet_id } => {
            let tweet = find_tweet(tweet_id)?;
            Some(match retweet_by(tweet, username) {
                Some(retweet) => ApiRequest::Unretweet { retweet_id: retweet.id.clone() },
                None => ApiRequest::Retweet { tweet_id: tweet.id.clone() },
            })
        }
        FeedAction::Comment { tweet_id, content } => {
            let tweet = find_tweet(tweet_id)?;
            let content = non_blank(content)?;
            Some(ApiRequest::CreateComment { tweet_id: tweet.id.clone(), content })
        }
        FeedAction::EditComment { comment_id, content } => {
            let content = non_blank(content)?;
            has_comment(comment_id).then(|| ApiRequest::UpdateComment { comment_id: comment_id.clone(), content })
        }
        FeedAction::DeleteComment { comment_id } => {
            has_comment(comment_id).then(|| ApiRequest::DeleteComment { comment_id: comment_id.clone() })
        }
        FeedAction::DeleteTweet { tweet_id } => {
            let tweet = find_tweet(tweet_id)?;
            Some(ApiRequest::DeleteTweet { tweet_id: tweet.id.clone() })
        }
    }
}

/// Resolve an action, asking `confirm` first when it is destructive.
///
/// A declined confirmation yields `None`: no call is made and the feed is
/// left as it was.
pub fn prepare<C>(action: &FeedAction, tweets: &[Tweet], username: &str, confirm: C) -> Option<ApiRequest>
where
    C: FnOnce(&str) -> bool,
{
    if let Some(question) = action.confirmation() {
        if !confirm(question) {
            return None;
        }
    }
    resolve(action, tweets, username)
}

/// What the feed page does once a mutating call settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The backend accepted the call: re-fetch the whole feed.
    Reload,
    /// The call failed: show this message and leave the feed as it is.
    Notify(String),
}

/// Decide the follow-up for a settled call made on behalf of `action`.
pub fn mutation_outcome(result: &Result<(), ApiError>, action: &FeedAction) -> MutationOutcome {
    match result {
        Ok(()) => MutationOutcome::Reload,
        Err(err) => MutationOutcome::Notify(err.user_message(action.failure_message())),
    }
}

/// Sort newest first. Unparseable timestamps go last; ties keep fetch order.
pub fn sort_newest_first(tweets: &mut [Tweet]) {
    tweets.sort_by_cached_key(|tweet| Reverse(timestamp::parse(&tweet.created_at)));
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Tweets shown on the feed page plus fetch bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub tweets: Vec<Tweet>,
    pub loading: bool,
    /// Tweet ids whose comment list is expanded.
    pub expanded: Vec<String>,
    generation: u64,
}

impl FeedState {
    /// Start a fetch and return its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Install fetched tweets if `ticket` is still the latest fetch.
    ///
    /// Returns whether the result was applied.
    pub fn finish_fetch(&mut self, ticket: u64, mut tweets: Vec<Tweet>) -> bool {
        if ticket != self.generation {
            return false;
        }
        sort_newest_first(&mut tweets);
        self.expanded.retain(|id| tweets.iter().any(|tweet| &tweet.id == id));
        self.tweets = tweets;
        self.loading = false;
        true
    }

    /// Record a failed fetch if `ticket` is still the latest.
    ///
    /// The previous tweet list stays on screen. Returns whether the failure
    /// belongs to the latest fetch.
    pub fn fail_fetch(&mut self, ticket: u64) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_expanded(&self, tweet_id: &str) -> bool {
        self.expanded.iter().any(|id| id == tweet_id)
    }

    /// Show or hide the comment list of a tweet.
    pub fn toggle_comments(&mut self, tweet_id: &str) {
        if let Some(pos) = self.expanded.iter().position(|id| id == tweet_id) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(tweet_id.to_owned());
        }
    }
}
