//! A single comment under a tweet.

use leptos::prelude::*;

use crate::net::types::{Authored, Comment};
use crate::pages::feed::FeedDispatch;
use crate::state::feed::FeedAction;
use crate::util::{dialog, timestamp};

/// Comment body with edit/delete controls for the comment's author.
#[component]
pub fn CommentCard(comment: Comment, username: String, dispatch: FeedDispatch) -> impl IntoView {
    let own = !username.is_empty() && comment.is_by(&username);
    let author = comment.author().map(|u| u.username.clone()).unwrap_or_default();
    let posted_at = timestamp::display(&comment.created_at);

    let on_edit = {
        let comment_id = comment.id.clone();
        let current = comment.content.clone();
        move |_| {
            let Some(content) = dialog::prompt("Edit comment", &current) else {
                return;
            };
            dispatch.run((FeedAction::EditComment { comment_id: comment_id.clone(), content }, None));
        }
    };
    let on_delete = {
        let comment_id = comment.id.clone();
        move |_| dispatch.run((FeedAction::DeleteComment { comment_id: comment_id.clone() }, None))
    };

    view! {
        <div class="comment-card">
            <div class="comment-card__meta">
                <span class="comment-card__author">{author}</span>
                <span class="comment-card__time">{posted_at}</span>
            </div>
            <p class="comment-card__content">{comment.content}</p>
            {own
                .then(|| {
                    view! {
                        <div class="comment-card__actions">
                            <button class="btn btn--link" on:click=on_edit>"Edit"</button>
                            <button class="btn btn--link btn--danger" on:click=on_delete>"Delete"</button>
                        </div>
                    }
                })}
        </div>
    }
}
