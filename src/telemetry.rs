use tracing_wasm::WASMLayerConfigBuilder;

use crate::config::LogLevel;

/// Routes panics and `tracing` events to the browser console.
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(level.as_tracing())
            .build(),
    );
}
