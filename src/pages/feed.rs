//! Feed screen: the authenticated landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches every tweet on mount and routes each card action through a
//! single `FeedDispatch` callback. Any successful mutation triggers a full
//! re-fetch; `FeedState` drops responses that a newer fetch has superseded.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::tweet_card::TweetCard;
use crate::components::tweet_composer::TweetComposer;
use crate::state::feed::{self, FeedAction, FeedState, MutationOutcome};
use crate::util::dialog;

const FEED_LOAD_FAILED: &str = "Could not load tweets.";

/// Card actions flow up through this callback. The optional hook runs only
/// after the backend accepts the call (a comment composer clears its draft).
pub type FeedDispatch = Callback<(FeedAction, Option<Callback<()>>)>;

#[component]
pub fn FeedPage(ctx: AppContext) -> impl IntoView {
    let feed = RwSignal::new(FeedState::default());
    reload_feed(ctx, feed);

    let dispatch: FeedDispatch = Callback::new(move |(action, on_sent): (FeedAction, Option<Callback<()>>)| {
        let username = ctx.username();
        let request = feed.with_untracked(|f| feed::prepare(&action, &f.tweets, &username, dialog::confirm));
        let Some(request) = request else {
            return;
        };
        let client = ctx.api();
        leptos::task::spawn_local(async move {
            let result = client.send(&request).await;
            if let Err(err) = &result {
                log::warn!("{action:?} failed: {err}");
            }
            match feed::mutation_outcome(&result, &action) {
                MutationOutcome::Reload => {
                    if let Some(on_sent) = on_sent {
                        on_sent.run(());
                    }
                    reload_feed(ctx, feed);
                }
                MutationOutcome::Notify(message) => ctx.notify_error(message),
            }
        });
    });

    let on_posted = Callback::new(move |()| reload_feed(ctx, feed));
    let on_toggle_comments = Callback::new(move |tweet_id: String| feed.update(|f| f.toggle_comments(&tweet_id)));
    let username = move || ctx.session.with(|s| s.username().to_owned());

    view! {
        <div class="feed-page">
            <header class="feed-page__header toolbar">
                <span class="toolbar__title">"Home"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{username}</span>
                <button class="btn toolbar__logout" on:click=move |_| ctx.sign_out() title="Logout">
                    "Logout"
                </button>
            </header>

            <TweetComposer ctx=ctx on_posted=on_posted/>

            <Show when=move || feed.with(|f| f.loading && f.tweets.is_empty())>
                <p class="feed-page__status">"Loading tweets..."</p>
            </Show>
            <Show when=move || feed.with(|f| !f.loading && f.tweets.is_empty())>
                <p class="feed-page__status">"No tweets yet."</p>
            </Show>

            <div class="feed-page__list">
                {move || {
                    let username = username();
                    feed.with(|f| {
                        f.tweets
                            .iter()
                            .map(|tweet| {
                                view! {
                                    <TweetCard
                                        tweet=tweet.clone()
                                        username=username.clone()
                                        expanded=f.is_expanded(&tweet.id)
                                        dispatch=dispatch
                                        on_toggle_comments=on_toggle_comments
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}

/// Fetch the whole feed and install it if no newer fetch has started since.
fn reload_feed(ctx: AppContext, feed: RwSignal<FeedState>) {
    let Some(ticket) = feed.try_update(FeedState::begin_fetch) else {
        return;
    };
    let client = ctx.api();
    leptos::task::spawn_local(async move {
        match client.fetch_tweets().await {
            Ok(tweets) => {
                let count = tweets.len();
                let applied = feed.try_update(|f| f.finish_fetch(ticket, tweets)).unwrap_or(false);
                if applied {
                    log::debug!("feed loaded: {count} tweets");
                } else {
                    log::debug!("discarded stale feed response (ticket {ticket})");
                }
            }
            Err(err) => {
                let latest = feed.try_update(|f| f.fail_fetch(ticket)).unwrap_or(false);
                if latest {
                    log::warn!("feed fetch failed: {err}");
                    ctx.notify_error(err.user_message(FEED_LOAD_FAILED));
                }
            }
        }
    });
}
