#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("mounting tweet client");
    leptos::mount::mount_to_body(tweet_client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("tweet-client renders in the browser; build it with the `csr` feature (for example `trunk serve`).");
}
