//! Runtime configuration of a [`DynamicArray`](crate::DynamicArray).
//!
//! Settings are passed to an array when it is created with
//! [`new_with`](crate::DynamicArray::new_with) and travel with it for its whole life,
//! including through [`take`](crate::DynamicArray::take).
//!
//! # Example
//! ```
//! use dynamic_array::{ArraySettings, DynamicArray};
//!
//! let settings = ArraySettings::new().trace_reallocations(true);
//! let mut array = DynamicArray::new_with(settings);
//!
//! // logs "reallocating from 2 to 6 slots" through the `log` facade
//! array.push_many([1, 2, 3]);
//! # assert_eq!(array.settings(), settings);
//! ```
//!
//! # Tracing reallocations
//! With [`trace_reallocations`](ArraySettings::trace_reallocations) enabled, the array reports
//! every allocation and reallocation at `debug` level and its destruction at `trace` level,
//! using the [`log`](https://docs.rs/log) crate with the target `dynamic_array`.
//! Nothing is printed unless the application installs a logger.

/// Settings of a [`DynamicArray`](crate::DynamicArray).
///
/// The default settings are the same as [`ArraySettings::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArraySettings {
    trace_reallocations: bool,
}

impl ArraySettings {
    /// Returns the default settings. Reallocation tracing is disabled.
    #[must_use]
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            trace_reallocations: false,
        }
    }

    /// Enables or disables logging of allocations, reallocations and destruction.
    #[must_use]
    #[inline(always)]
    pub const fn trace_reallocations(mut self, enabled: bool) -> Self {
        self.trace_reallocations = enabled;
        self
    }

    /// Returns whether allocations, reallocations and destruction are logged.
    #[must_use]
    #[inline(always)]
    pub const fn traces_reallocations(&self) -> bool {
        self.trace_reallocations
    }
}
