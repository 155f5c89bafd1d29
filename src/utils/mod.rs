//! Utility modules

pub mod contact;
pub mod order;
pub mod storage;

// Shared browser helpers

/// Opens `url` in a new browsing context
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("could not open {}: {:?}", url, e);
            }
        }
        None => log::warn!("no window to open {}", url),
    }
}

/// Console logging; debug builds log everything
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}
