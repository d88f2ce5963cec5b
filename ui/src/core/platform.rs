//! Platform tag helpers for debug traces.

pub fn platform_string() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else {
        "desktop"
    }
}
