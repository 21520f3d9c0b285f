//! Logging shim
//!
//! Forwards to `defmt` when the `defmt` feature is enabled. Otherwise the
//! arguments are borrowed and dropped, so host builds carry no logging
//! transport and no unused-variable noise.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::trace!($s $(, $x)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::debug!($s $(, $x)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::warn!($s $(, $x)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}
