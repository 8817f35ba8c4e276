//! Root application component and the shared application context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::toast::ToastHost;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{feed::FeedPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::{Screen, SessionState};
use crate::state::toast::ToastState;
use crate::util::storage::LocalSessionStore;

/// Everything a screen needs from the root: configuration, the session
/// holder, and the notification slot.
///
/// Created once in `App` and handed to each screen as a prop.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: RwSignal<SessionState>,
    pub toast: RwSignal<ToastState>,
}

impl AppContext {
    /// Build the context, restoring any session persisted by an earlier visit.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: RwSignal::new(SessionState::restore(&LocalSessionStore)),
            toast: RwSignal::new(ToastState::default()),
        }
    }

    /// HTTP client carrying the current session token, if any.
    pub fn api(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().map(str::to_owned));
        ApiClient::new(self.config.api_base_url).with_token(token)
    }

    /// Username of the logged-in user, or empty when anonymous.
    pub fn username(&self) -> String {
        self.session.with_untracked(|s| s.username().to_owned())
    }

    pub fn navigate(&self, to: Screen) {
        self.session.update(|s| s.navigate(to));
    }

    pub fn sign_out(&self) {
        log::info!("signed out");
        self.session.update(|s| s.sign_out(&LocalSessionStore));
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.toast.update(|t| {
            t.success(message);
        });
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.toast.update(|t| {
            t.error(message);
        });
    }
}

/// Root application component.
///
/// Renders the notification host and whichever screen the session holder
/// selects. A present session always selects the feed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(ClientConfig::from_build_env());
    let screen = Memo::new(move |_| ctx.session.with(SessionState::screen));

    view! {
        <Title text="Tweet"/>
        <ToastHost ctx=ctx/>
        <main class="app">
            {move || match screen.get() {
                Screen::Home => view! { <HomePage ctx=ctx/> }.into_any(),
                Screen::Login => view! { <LoginPage ctx=ctx/> }.into_any(),
                Screen::Register => view! { <RegisterPage ctx=ctx/> }.into_any(),
                Screen::Feed => view! { <FeedPage ctx=ctx/> }.into_any(),
            }}
        </main>
    }
}
