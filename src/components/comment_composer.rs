//! Inline reply form under an expanded tweet.

use leptos::prelude::*;

use crate::pages::feed::FeedDispatch;
use crate::state::feed::FeedAction;

/// Single-line comment input that dispatches `FeedAction::Comment`.
///
/// The draft is cleared only once the backend accepts the comment, so a
/// failed post leaves the text in place for another try.
#[component]
pub fn CommentComposer(tweet_id: String, dispatch: FeedDispatch) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let clear = Callback::new(move |()| content.set(String::new()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        dispatch.run((FeedAction::Comment { tweet_id: tweet_id.clone(), content: text }, Some(clear)));
    };

    view! {
        <form class="comment-composer" on:submit=on_submit>
            <input
                class="comment-composer__input"
                type="text"
                placeholder="Write a comment..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            />
            <button class="btn" type="submit" disabled=move || content.with(|c| c.trim().is_empty())>
                "Reply"
            </button>
        </form>
    }
}
