//! Logging macros. They forward to the `log` facade when the `logging`
//! feature is enabled and expand to nothing otherwise.

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}
