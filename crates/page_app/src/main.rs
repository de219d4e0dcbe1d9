#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod ui;

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    platform::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("page_app runs in the browser; build it for wasm32-unknown-unknown.");
}
