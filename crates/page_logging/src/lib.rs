#![deny(missing_docs)]
//! Log macros for the marketing page.
//!
//! Every line the page writes goes through the `page_*!` macros, which forward
//! to the `log` facade. In the browser the console logger prefixes each line
//! with the scroll frame it was written in (see [`set_frame`]); natively the
//! core crate's tests install a terminal logger with [`initialize_for_tests`].

use std::cell::Cell;

thread_local! {
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Records the number of the scroll frame now running.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// The scroll frame recorded by [`set_frame`]; 0 until the first frame.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Setup results, media fallbacks and other one-off page events.
#[macro_export]
macro_rules! page_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Per-interaction detail: dispatched effects, playback attempts.
#[macro_export]
macro_rules! page_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// A page feature degraded but the rest keeps working.
#[macro_export]
macro_rules! page_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// A browser call failed where the page cannot recover.
#[macro_export]
macro_rules! page_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Routes page logs to the terminal when the state machine runs under
/// `cargo test`. Later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counter_is_per_thread() {
        set_frame(7);
        assert_eq!(current_frame(), 7);

        let other = std::thread::spawn(current_frame).join().unwrap();
        assert_eq!(other, 0);
    }

    #[test]
    fn macros_accept_format_arguments() {
        initialize_for_tests();
        let section = 3;
        page_info!("revealed section#{section}");
        page_debug!("frame {}", current_frame());
        page_warn!("{}: {}", "video", "autoplay blocked");
        page_error!("setup failed");
    }
}
