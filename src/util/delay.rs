//! Cancelable one-shot timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components schedule delayed work (toast dismissal, post-registration
//! redirect) and cancel it from `on_cleanup` so nothing fires after the
//! component is gone. Outside the browser nothing is scheduled.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared flag checked by a pending timer before it runs.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run `f` after `delay` unless `flag` was cancelled in the meantime.
pub fn schedule<F>(delay: Duration, flag: CancelFlag, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        if !flag.is_cancelled() {
            f();
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay, flag, f);
    }
}
