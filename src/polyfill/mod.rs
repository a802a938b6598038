//! Pointer helpers that read better as named functions.
//!
//! Nothing in here is from the standard library.

pub(crate) mod nonnull;
