//! Form for posting a new tweet.

use leptos::prelude::*;

use crate::app::AppContext;

const POST_FAILED: &str = "Could not post tweet.";

/// Text area plus submit button; calls `on_posted` after the backend accepts the tweet.
#[component]
pub fn TweetComposer(ctx: AppContext, on_posted: Callback<()>) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let text = content.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        busy.set(true);

        let client = ctx.api();
        leptos::task::spawn_local(async move {
            match client.create_tweet(&text).await {
                Ok(()) => {
                    content.set(String::new());
                    ctx.notify_success("Tweet posted.");
                    on_posted.run(());
                }
                Err(err) => {
                    log::warn!("posting tweet failed: {err}");
                    ctx.notify_error(err.user_message(POST_FAILED));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="composer" on:submit=on_submit>
            <textarea
                class="composer__input"
                placeholder="What's happening?"
                rows="3"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <div class="composer__actions">
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || content.with(|c| c.trim().is_empty())
                >
                    {move || if busy.get() { "Posting..." } else { "Tweet" }}
                </button>
            </div>
        </form>
    }
}
