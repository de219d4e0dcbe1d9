//! Browser platform: wires the page to `page_core` through web-sys.
mod app;
mod dom;
mod effects;
mod error;
mod listener;
mod logging;
mod reveal;

use page_logging::page_error;

pub fn start() {
    console_error_panic_hook::set_once();
    logging::initialize();

    if let Err(err) = app::run_when_ready() {
        page_error!("page controller failed to start: {}", err);
    }
}
