#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(budget_client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("budget-client renders in the browser; build with `trunk serve --features csr`");
}
