//! Transient notification banner.
//!
//! DESIGN
//! ======
//! `ToastHost` re-renders whenever the notification slot changes, so a new
//! message replaces the old banner and the old banner's cleanup cancels its
//! dismissal timer.

use std::time::Duration;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::toast::{Toast, ToastKind};
use crate::util::delay::{self, CancelFlag};

/// Renders the current notification, if any.
#[component]
pub fn ToastHost(ctx: AppContext) -> impl IntoView {
    let on_dismiss = Callback::new(move |id: u64| ctx.toast.update(|t| t.dismiss(id)));

    move || {
        ctx.toast.with(|t| t.current().cloned()).map(|toast| {
            view! { <ToastBanner toast=toast duration=ctx.config.toast_duration on_dismiss=on_dismiss/> }
        })
    }
}

/// A single notification that dismisses itself after `duration`.
#[component]
pub fn ToastBanner(toast: Toast, duration: Duration, on_dismiss: Callback<u64>) -> impl IntoView {
    let id = toast.id;
    let timer = CancelFlag::new();
    delay::schedule(duration, timer.clone(), move || on_dismiss.run(id));
    on_cleanup(move || timer.cancel());

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status" on:click=move |_| on_dismiss.run(id)>
            {toast.message}
        </div>
    }
}
