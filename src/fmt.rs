//! Logging shims. Forwards to `log` or `defmt` depending on the enabled feature
//! and compiles to nothing if neither is enabled or the level feature is off.

#![allow(unused_macros)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("You may not enable both `defmt` and `log` features.");

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "log", feature = "log-level-trace"))]
            ::log::trace!($s $(, $x)*);
            #[cfg(all(feature = "defmt", feature = "log-level-trace"))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(all(any(feature = "log", feature = "defmt"), feature = "log-level-trace")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "log", feature = "log-level-debug"))]
            ::log::debug!($s $(, $x)*);
            #[cfg(all(feature = "defmt", feature = "log-level-debug"))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(all(any(feature = "log", feature = "defmt"), feature = "log-level-debug")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warning {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "log", feature = "log-level-warn"))]
            ::log::warn!($s $(, $x)*);
            #[cfg(all(feature = "defmt", feature = "log-level-warn"))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(all(any(feature = "log", feature = "defmt"), feature = "log-level-warn")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "log", feature = "log-level-error"))]
            ::log::error!($s $(, $x)*);
            #[cfg(all(feature = "defmt", feature = "log-level-error"))]
            ::defmt::error!($s $(, $x)*);
            #[cfg(not(all(any(feature = "log", feature = "defmt"), feature = "log-level-error")))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_imports)]
pub(crate) use {debug, error, trace, warning};
