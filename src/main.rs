// The native build only prints a hint; these modules are reached from the
// wasm32 frontend and from host tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod platform;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod state;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod telemetry;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
