use super::*;
use crate::net::types::{Comment, UserRef};

fn user(name: &str) -> Option<UserRef> {
    Some(UserRef { id: format!("u-{name}"), username: name.to_owned() })
}

fn tweet(id: &str, created_at: &str) -> Tweet {
    Tweet {
        id: id.to_owned(),
        user: user("grace"),
        content: format!("tweet {id}"),
        created_at: created_at.to_owned(),
        likes: Vec::new(),
        retweets: Vec::new(),
        comments: Vec::new(),
    }
}

fn liked_by_ada() -> Tweet {
    let mut t = tweet("7", "2024-05-01T10:00:00Z");
    t.likes = vec![
        Like { id: "l-1".to_owned(), user: user("grace") },
        Like { id: "l-2".to_owned(), user: user("ada") },
    ];
    t.retweets = vec![Retweet { id: "r-1".to_owned(), user: user("ada") }];
    t.comments = vec![Comment {
        id: "c-1".to_owned(),
        user: user("ada"),
        content: "first".to_owned(),
        created_at: "2024-05-01T11:00:00Z".to_owned(),
    }];
    t
}

fn ids(tweets: &[Tweet]) -> Vec<&str> {
    tweets.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// Like / retweet toggling
// =============================================================

#[test]
fn like_on_tweet_already_liked_deletes_that_like() {
    let tweets = vec![liked_by_ada()];
    let request = resolve(&FeedAction::Like { tweet_id: "7".to_owned() }, &tweets, "ada");
    assert_eq!(request, Some(ApiRequest::Unlike { like_id: "l-2".to_owned() }));
}

#[test]
fn like_on_tweet_not_yet_liked_creates_like() {
    let tweets = vec![liked_by_ada()];
    let request = resolve(&FeedAction::Like { tweet_id: "7".to_owned() }, &tweets, "linus");
    assert_eq!(request, Some(ApiRequest::Like { tweet_id: "7".to_owned() }));
}

#[test]
fn retweet_toggles_on_current_user_entry() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::Retweet { tweet_id: "7".to_owned() };
    assert_eq!(
        resolve(&action, &tweets, "ada"),
        Some(ApiRequest::Unretweet { retweet_id: "r-1".to_owned() })
    );
    assert_eq!(
        resolve(&action, &tweets, "grace"),
        Some(ApiRequest::Retweet { tweet_id: "7".to_owned() })
    );
}

#[test]
fn anonymous_username_never_matches_entries() {
    let mut t = liked_by_ada();
    t.likes.push(Like { id: "l-anon".to_owned(), user: None });
    let request = resolve(&FeedAction::Like { tweet_id: "7".to_owned() }, &[t], "");
    assert_eq!(request, Some(ApiRequest::Like { tweet_id: "7".to_owned() }));
}

#[test]
fn actions_on_missing_targets_send_nothing() {
    let tweets = vec![liked_by_ada()];
    assert_eq!(resolve(&FeedAction::Like { tweet_id: "404".to_owned() }, &tweets, "ada"), None);
    assert_eq!(resolve(&FeedAction::Retweet { tweet_id: "404".to_owned() }, &tweets, "ada"), None);
    assert_eq!(
        resolve(&FeedAction::Comment { tweet_id: "404".to_owned(), content: "hi".to_owned() }, &tweets, "ada"),
        None
    );
    assert_eq!(resolve(&FeedAction::DeleteComment { comment_id: "c-404".to_owned() }, &tweets, "ada"), None);
    assert_eq!(resolve(&FeedAction::DeleteTweet { tweet_id: "404".to_owned() }, &tweets, "ada"), None);
}

// =============================================================
// Comments
// =============================================================

#[test]
fn comment_is_trimmed_and_blank_is_dropped() {
    let tweets = vec![liked_by_ada()];
    assert_eq!(
        resolve(&FeedAction::Comment { tweet_id: "7".to_owned(), content: "  hi  ".to_owned() }, &tweets, "ada"),
        Some(ApiRequest::CreateComment { tweet_id: "7".to_owned(), content: "hi".to_owned() })
    );
    assert_eq!(
        resolve(&FeedAction::Comment { tweet_id: "7".to_owned(), content: "   ".to_owned() }, &tweets, "ada"),
        None
    );
}

#[test]
fn edit_comment_updates_existing_comment() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::EditComment { comment_id: "c-1".to_owned(), content: "edited".to_owned() };
    assert_eq!(
        resolve(&action, &tweets, "ada"),
        Some(ApiRequest::UpdateComment { comment_id: "c-1".to_owned(), content: "edited".to_owned() })
    );
    let blank = FeedAction::EditComment { comment_id: "c-1".to_owned(), content: String::new() };
    assert_eq!(resolve(&blank, &tweets, "ada"), None);
}

// =============================================================
// Confirmation gate
// =============================================================

#[test]
fn delete_tweet_without_confirmation_sends_nothing() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::DeleteTweet { tweet_id: "7".to_owned() };
    let mut asked = None;
    let request = prepare(&action, &tweets, "ada", |question| {
        asked = Some(question.to_owned());
        false
    });
    assert_eq!(request, None);
    assert_eq!(asked.as_deref(), Some("Delete this tweet?"));
}

#[test]
fn delete_tweet_with_confirmation_sends_delete() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::DeleteTweet { tweet_id: "7".to_owned() };
    assert_eq!(
        prepare(&action, &tweets, "ada", |_| true),
        Some(ApiRequest::DeleteTweet { tweet_id: "7".to_owned() })
    );
}

#[test]
fn delete_comment_requires_confirmation() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::DeleteComment { comment_id: "c-1".to_owned() };
    assert_eq!(prepare(&action, &tweets, "ada", |_| false), None);
    assert_eq!(
        prepare(&action, &tweets, "ada", |_| true),
        Some(ApiRequest::DeleteComment { comment_id: "c-1".to_owned() })
    );
}

#[test]
fn non_destructive_actions_skip_confirmation() {
    let tweets = vec![liked_by_ada()];
    let action = FeedAction::Like { tweet_id: "7".to_owned() };
    let request = prepare(&action, &tweets, "linus", |_| panic!("like must not ask for confirmation"));
    assert_eq!(request, Some(ApiRequest::Like { tweet_id: "7".to_owned() }));
}

// =============================================================
// Sorting and fetch generations
// =============================================================

#[test]
fn sort_orders_newest_first() {
    let mut tweets = vec![
        tweet("old", "2024-01-01T00:00:00Z"),
        tweet("new", "2024-03-01T00:00:00Z"),
        tweet("mid", "2024-02-01T00:00:00.500Z"),
    ];
    sort_newest_first(&mut tweets);
    assert_eq!(ids(&tweets), ["new", "mid", "old"]);
}

#[test]
fn sort_puts_unparseable_last_and_keeps_ties_stable() {
    let mut tweets = vec![
        tweet("bad-1", "garbage"),
        tweet("a", "2024-01-01T00:00:00Z"),
        tweet("bad-2", ""),
        tweet("b", "2024-01-01T00:00:00Z"),
    ];
    sort_newest_first(&mut tweets);
    assert_eq!(ids(&tweets), ["a", "b", "bad-1", "bad-2"]);
}

#[test]
fn finish_fetch_applies_latest_ticket_sorted() {
    let mut feed = FeedState::default();
    let ticket = feed.begin_fetch();
    assert!(feed.loading);
    let applied = feed.finish_fetch(
        ticket,
        vec![tweet("1", "2024-01-01T00:00:00Z"), tweet("2", "2024-06-01T00:00:00Z")],
    );
    assert!(applied);
    assert!(!feed.loading);
    assert_eq!(ids(&feed.tweets), ["2", "1"]);
}

#[test]
fn stale_fetch_cannot_clobber_newer_one() {
    let mut feed = FeedState::default();
    let older = feed.begin_fetch();
    let newer = feed.begin_fetch();

    assert!(feed.finish_fetch(newer, vec![tweet("fresh", "2024-06-01T00:00:00Z")]));
    assert!(!feed.finish_fetch(older, vec![tweet("stale", "2024-01-01T00:00:00Z")]));

    assert_eq!(ids(&feed.tweets), ["fresh"]);
}

#[test]
fn stale_failure_keeps_loading_for_pending_fetch() {
    let mut feed = FeedState::default();
    let older = feed.begin_fetch();
    let newer = feed.begin_fetch();
    assert!(!feed.fail_fetch(older));
    assert!(feed.loading);
    assert!(feed.fail_fetch(newer));
    assert!(!feed.loading);
}

#[test]
fn failed_fetch_keeps_previous_tweets() {
    let mut feed = FeedState::default();
    let first = feed.begin_fetch();
    feed.finish_fetch(first, vec![tweet("1", "2024-01-01T00:00:00Z")]);
    let second = feed.begin_fetch();
    feed.fail_fetch(second);
    assert_eq!(ids(&feed.tweets), ["1"]);
}

#[test]
fn toggle_comments_flips_expansion() {
    let mut feed = FeedState::default();
    assert!(!feed.is_expanded("7"));
    feed.toggle_comments("7");
    assert!(feed.is_expanded("7"));
    feed.toggle_comments("7");
    assert!(!feed.is_expanded("7"));
}

#[test]
fn failure_messages_are_action_specific() {
    assert_eq!(
        FeedAction::DeleteTweet { tweet_id: "1".to_owned() }.failure_message(),
        "Could not delete tweet."
    );
    assert_eq!(FeedAction::Like { tweet_id: "1".to_owned() }.failure_message(), "Could not update like.");
}

// =============================================================
// Mutation follow-up
// =============================================================

#[test]
fn accepted_mutation_reloads_feed() {
    let actions = [
        FeedAction::Like { tweet_id: "1".to_owned() },
        FeedAction::Comment { tweet_id: "1".to_owned(), content: "hi".to_owned() },
        FeedAction::DeleteTweet { tweet_id: "1".to_owned() },
    ];
    for action in &actions {
        assert_eq!(mutation_outcome(&Ok(()), action), MutationOutcome::Reload);
    }
}

#[test]
fn rejected_mutation_notifies_without_reload() {
    let action = FeedAction::Retweet { tweet_id: "1".to_owned() };
    let err = ApiError::from_status(403, r#"{"message":"Forbidden resource"}"#);
    assert_eq!(
        mutation_outcome(&Err(err), &action),
        MutationOutcome::Notify("Forbidden resource".to_owned())
    );
}

#[test]
fn failed_comment_falls_back_and_keeps_draft() {
    // Only `Reload` runs the composer's clear hook.
    let action = FeedAction::Comment { tweet_id: "1".to_owned(), content: "draft".to_owned() };
    let outcome = mutation_outcome(&Err(ApiError::Network("offline".to_owned())), &action);
    assert_eq!(outcome, MutationOutcome::Notify("Could not post comment.".to_owned()));
}

#[test]
fn finish_fetch_forgets_expansion_of_vanished_tweets() {
    let mut feed = FeedState::default();
    let first = feed.begin_fetch();
    feed.finish_fetch(first, vec![tweet("1", "2024-01-01T00:00:00Z"), tweet("2", "2024-02-01T00:00:00Z")]);
    feed.toggle_comments("1");
    feed.toggle_comments("2");

    let second = feed.begin_fetch();
    feed.finish_fetch(second, vec![tweet("2", "2024-02-01T00:00:00Z")]);

    assert!(!feed.is_expanded("1"));
    assert!(feed.is_expanded("2"));
    assert_eq!(feed.expanded, ["2"]);
}
