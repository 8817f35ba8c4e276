//! Login screen: exchanges username + password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::{Screen, Session, SessionState};
use crate::util::storage::{LocalSessionStore, SessionStore};

const LOGIN_FAILED: &str = "Login failed. Check your credentials.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Apply a login response to the session holder.
///
/// A token signs the user in (persisting it) and routes to the feed. A
/// failure leaves the session untouched and returns the message to show.
fn apply_login_result(
    result: Result<String, ApiError>,
    username: &str,
    session: &mut SessionState,
    store: &impl SessionStore,
) -> Result<(), String> {
    match result {
        Ok(token) => {
            session.sign_in(Session { token, username: username.to_owned() }, store);
            Ok(())
        }
        Err(err) => Err(err.user_message(LOGIN_FAILED)),
    }
}

#[component]
pub fn LoginPage(ctx: AppContext) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                ctx.notify_error(message);
                return;
            }
        };
        busy.set(true);

        let client = ctx.api();
        leptos::task::spawn_local(async move {
            let result = client.login(&request).await;
            if let Err(err) = &result {
                log::warn!("login failed for {}: {err}", request.username);
            }
            let outcome =
                ctx.session.try_update(|s| apply_login_result(result, &request.username, s, &LocalSessionStore));
            match outcome {
                Some(Ok(())) => log::info!("signed in as {}", request.username),
                Some(Err(message)) => {
                    ctx.notify_error(message);
                    busy.set(false);
                }
                None => busy.set(false),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Log In"</h2>
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
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log In" }}
                </button>
                <p class="auth-form__switch">
                    "No account yet? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Screen::Register);
                        }
                    >
                        "Register"
                    </a>
                </p>
            </form>
        </div>
    }
}
