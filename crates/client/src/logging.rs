//! Cross-platform logging.
//!
//! The `log_*` macros format their arguments and hand them to [`emit`], which
//! writes to the browser console on web and to `tracing` on desktop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, msg: &str) {
    let line = format!("[ulms] {msg}");
    match level {
        Level::Debug => web_sys::console::debug_1(&line.into()),
        Level::Info => web_sys::console::log_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Error => web_sys::console::error_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!(target: "ulms_client", "{msg}"),
        Level::Info => tracing::info!(target: "ulms_client", "{msg}"),
        Level::Warn => tracing::warn!(target: "ulms_client", "{msg}"),
        Level::Error => tracing::error!(target: "ulms_client", "{msg}"),
    }
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Error, &format!($($arg)*))
    };
}
