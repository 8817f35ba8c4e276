//! Card for one tweet in the feed.
//!
//! DESIGN
//! ======
//! Cards hold no state of their own. Every button turns into a `FeedAction`
//! handed to the page's `FeedDispatch`, and the card is re-rendered from the
//! re-fetched feed.

use leptos::prelude::*;

use crate::components::comment_card::CommentCard;
use crate::components::comment_composer::CommentComposer;
use crate::net::types::{Authored, Tweet};
use crate::pages::feed::FeedDispatch;
use crate::state::feed::{self, FeedAction};
use crate::util::timestamp;

#[component]
pub fn TweetCard(
    tweet: Tweet,
    username: String,
    expanded: bool,
    dispatch: FeedDispatch,
    on_toggle_comments: Callback<String>,
) -> impl IntoView {
    let liked = feed::like_by(&tweet, &username).is_some();
    let retweeted = feed::retweet_by(&tweet, &username).is_some();
    let own = !username.is_empty() && tweet.is_by(&username);
    let author = tweet.author().map(|u| u.username.clone()).unwrap_or_default();
    let posted_at = timestamp::display(&tweet.created_at);
    let like_count = tweet.likes.len();
    let retweet_count = tweet.retweets.len();
    let comment_count = tweet.comments.len();

    let tweet_id = tweet.id.clone();
    let on_like = {
        let tweet_id = tweet_id.clone();
        move |_| dispatch.run((FeedAction::Like { tweet_id: tweet_id.clone() }, None))
    };
    let on_retweet = {
        let tweet_id = tweet_id.clone();
        move |_| dispatch.run((FeedAction::Retweet { tweet_id: tweet_id.clone() }, None))
    };
    let on_comments = {
        let tweet_id = tweet_id.clone();
        move |_| on_toggle_comments.run(tweet_id.clone())
    };
    let on_delete = {
        let tweet_id = tweet_id.clone();
        move |_| dispatch.run((FeedAction::DeleteTweet { tweet_id: tweet_id.clone() }, None))
    };

    let comments = expanded.then(|| {
        let cards = tweet
            .comments
            .iter()
            .map(|comment| {
                view! { <CommentCard comment=comment.clone() username=username.clone() dispatch=dispatch/> }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="tweet-card__comments">
                {cards}
                <CommentComposer tweet_id=tweet_id.clone() dispatch=dispatch/>
            </div>
        }
    });

    view! {
        <article class="tweet-card">
            <header class="tweet-card__meta">
                <span class="tweet-card__author">{author}</span>
                <span class="tweet-card__time">{posted_at}</span>
            </header>
            <p class="tweet-card__content">{tweet.content}</p>
            <footer class="tweet-card__actions">
                <button
                    class="tweet-card__action"
                    class:tweet-card__action--active=liked
                    on:click=on_like
                    title=if liked { "Unlike" } else { "Like" }
                >
                    {format!("♥ {like_count}")}
                </button>
                <button
                    class="tweet-card__action"
                    class:tweet-card__action--active=retweeted
                    on:click=on_retweet
                    title=if retweeted { "Undo retweet" } else { "Retweet" }
                >
                    {format!("⟲ {retweet_count}")}
                </button>
                <button class="tweet-card__action" on:click=on_comments title="Comments">
                    {format!("💬 {comment_count}")}
                </button>
                {own
                    .then(|| {
                        view! {
                            <button
                                class="tweet-card__action tweet-card__action--danger"
                                on:click=on_delete
                                title="Delete tweet"
                            >
                                "✕"
                            </button>
                        }
                    })}
            </footer>
            {comments}
        </article>
    }
}
