//! Landing screen for anonymous visitors.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::session::Screen;

/// Welcome text with links to registration and login.
#[component]
pub fn HomePage(ctx: AppContext) -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p class="home-page__subtitle">"Register or log in to see what everyone is tweeting."</p>
            <div class="home-page__actions">
                <button class="btn btn--primary" on:click=move |_| ctx.navigate(Screen::Register)>
                    "Register"
                </button>
                <button class="btn" on:click=move |_| ctx.navigate(Screen::Login)>
                    "Log In"
                </button>
            </div>
        </div>
    }
}
