// Without the `logging` feature, `log!` expands to nothing and the macros
// below go unused.
#![allow(unused_macros)]

/// Emits the given statement only when the `logging` feature is enabled.
///
/// The arguments of a disabled log statement aren't evaluated at all, so
/// anything only used for logging should be named with a leading
/// underscore.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

/// Logs failures that callers are expected to handle, like a datetime
/// leaving its supported range.
macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

/// Logs rejected input. Parsing failures are often routine (for example,
/// when probing a value with `try_parse`), so this is the quietest level.
macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
