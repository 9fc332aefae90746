#![allow(unused, reason = "logger")]
//! Logging shims, compiled out unless the `log` feature is enabled.

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "strait", $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "strait", $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!(target: "strait", $($tt)*);
    };
}

/// Log a [`Reject`][crate::h1::Reject] together with the phase it happened in.
///
/// Limit violations are logged as warning, grammar violations as debug.
macro_rules! rejected {
    ($reason:expr, $phase:expr) => {
        #[cfg(feature = "log")]
        {
            let reason: $crate::h1::Reject = $reason;
            if reason.is_limit() {
                ::log::warn!(target: "strait", "message rejected in {:?}: {reason}", $phase);
            } else {
                ::log::debug!(target: "strait", "message rejected in {:?}: {reason}", $phase);
            }
        }
    };
}

pub(crate) use {trace, debug, warning, rejected};
