//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Pipeline stages log dropped candidates and parse failures at info/warn,
//! but the engine sits on every request path, so each module opts in:
//!
//! ```rust
//! const ENABLE_LOGS: bool = false;
//! use manna_context::log_info;
//!
//! # fn example() {
//! # let id = "c-1";
//! log_info!("dropping candidate {id}");
//! # }
//! ```

/// Info-level logging, compiled against the calling module's `ENABLE_LOGS`
/// const.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, compiled against the calling module's `ENABLE_LOGS`
/// const.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level logging, compiled against the calling module's `ENABLE_LOGS`
/// const.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
