//! Registration screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful registration does not log the user in: it shows a success
//! notification and switches to the login screen after a short pause. The
//! pending switch is cancelled if the user leaves the screen first.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::state::session::Screen;
use crate::util::delay::{self, CancelFlag};

const REGISTER_SUCCEEDED: &str = "Registration successful! Redirecting to login...";
const REGISTER_FAILED: &str = "Registration failed.";

/// Trim username and email, require every field, and sanity-check the email.
fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Same shape check a browser applies to `type="email"`: one `@` with text
/// on both sides and no whitespace.
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Where a successful registration sends the user, and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RegisterRedirect {
    message: &'static str,
    to: Screen,
    after: Duration,
}

/// Follow-up for a registration response: a delayed redirect on success,
/// otherwise the error text to show.
fn register_feedback(result: &Result<(), ApiError>, config: &ClientConfig) -> Result<RegisterRedirect, String> {
    match result {
        Ok(()) => Ok(RegisterRedirect {
            message: REGISTER_SUCCEEDED,
            to: Screen::Login,
            after: config.register_redirect_delay,
        }),
        Err(err) => Err(err.user_message(REGISTER_FAILED)),
    }
}

#[component]
pub fn RegisterPage(ctx: AppContext) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let redirect = CancelFlag::new();
    on_cleanup({
        let redirect = redirect.clone();
        move || redirect.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request =
            match validate_register_input(&username.get_untracked(), &email.get_untracked(), &password.get_untracked())
            {
                Ok(request) => request,
                Err(message) => {
                    ctx.notify_error(message);
                    return;
                }
            };
        busy.set(true);

        let client = ctx.api();
        let redirect = redirect.clone();
        leptos::task::spawn_local(async move {
            let result = client.register(&request).await;
            match register_feedback(&result, &ctx.config) {
                Ok(next) => {
                    log::info!("registered {}", request.username);
                    ctx.notify_success(next.message);
                    delay::schedule(next.after, redirect, move || ctx.navigate(next.to));
                }
                Err(message) => {
                    if let Err(err) = &result {
                        log::warn!("registration failed for {}: {err}", request.username);
                    }
                    ctx.notify_error(message);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Create Account"</h2>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        name="username"
                        autocomplete="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        name="email"
                        autocomplete="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        name="password"
                        autocomplete="new-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-form__switch">
                    "Already have an account? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Screen::Login);
                        }
                    >
                        "Log In"
                    </a>
                </p>
            </form>
        </div>
    }
}
