//! Crate-private logging macros.
//!
//! They forward to `tracing` when the `tracing` feature is on, and always under
//! `cfg(test)`. Otherwise they expand to nothing and their arguments are not evaluated.
//! They are not part of the public API:
//!
//! ```compile_fail
//! pluralizer::trace!("not exported");
//! ```
//!
//! ```compile_fail
//! pluralizer::debug!("not exported");
//! ```

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) use {debug, trace};
