// NB: We avoid using closures to map `Result` and `Option`s in various places because they result in less readable assembly output.
// When using closures, functions like `capacity_overflow` can get the name of some closure that invokes it instead.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::partialeq_ne_impl,
    clippy::items_after_statements,
    unknown_lints
)]
#![doc(test(attr(warn(dead_code))))]
//! A contiguous growable array with an explicit, observable growth policy.
//!
//! [`DynamicArray<T>`] owns a single heap allocation holding its elements. It grows that
//! allocation when an append does not fit, relocating the elements into a new buffer.
//!
//! ```
//! use dynamic_array::{dynamic_array, DynamicArray};
//!
//! let mut array: DynamicArray<i32> = DynamicArray::new();
//! assert_eq!(array.capacity(), 2);
//!
//! array.push(1);
//! array.push(2);
//! array.push(3);
//! assert_eq!(array.capacity(), 5);
//! assert_eq!(array, [1, 2, 3]);
//!
//! let listed = dynamic_array![1, 2, 3];
//! assert_eq!(listed.capacity(), 3);
//! assert_eq!(array, listed);
//! ```
//!
//! # Growth policy
//! - A single-element append reallocates when `len >= capacity`, to `2 * capacity + 1` slots.
//! - [`push_many`](DynamicArray::push_many) of `count` elements reallocates when
//!   `len + count >= capacity`, to `capacity + count + 1` slots.
//! - [`reserve`](DynamicArray::reserve) reallocates to exactly the requested capacity,
//!   dropping elements that do not fit.
//!
//! Starting from [`DynamicArray::new`] the capacity therefore goes 2, 5, 11, 23, 47 and so on.
//!
//! # Construction discipline
//! Slots past `len` are always uninitialized memory. Every insertion writes a fresh value into
//! such a slot; no insertion path ever assigns over an existing value. Relocation on growth is a
//! bitwise move, so growing never clones and never drops a live element.
//!
//! # Cursors
//! [`begin`](DynamicArray::begin) and [`end`](DynamicArray::end) return [`Cursor`]s, raw
//! positions into the buffer that can be stepped in both directions. A cursor borrows its array,
//! so the compiler rejects any call that could reallocate or drop the array while the cursor is
//! alive. Dereferencing a cursor is `unsafe` because the cursor does not check its bounds.
//!
//! # Failure
//! Every allocating method comes in two flavors: `method` panics on capacity overflow and
//! calls [`handle_alloc_error`](allocator_api2::alloc::handle_alloc_error) when allocating fails,
//! `try_method` returns an [`AllocError`](alloc::AllocError) instead and leaves the array unchanged.
//!
//! # Feature Flags
//! * **`std`** *(enabled by default)*: Adds [`DynamicArray::print`] which writes to standard output.
//! * **`panic-on-alloc`** *(enabled by default)*: Adds the panicking flavor of allocating methods.
//!   Without it only the `try_` methods are available.

pub mod alloc;
/// Contains [`DynamicArray`] and its [`INITIAL_CAPACITY`](crate::array::INITIAL_CAPACITY).
pub mod array;
mod cursor;
mod error_behavior;
mod partial_eq;
mod polyfill;
mod raw_buffer;
/// Contains [`ArraySettings`](settings::ArraySettings).
pub mod settings;

pub use allocator_api2;
#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;
use core::mem;
pub use cursor::Cursor;
#[doc(inline)]
pub use array::DynamicArray;
use error_behavior::ErrorBehavior;
#[cfg(feature = "panic-on-alloc")]
use private::capacity_overflow;
pub use settings::ArraySettings;

#[cfg(test)]
mod tests;

/// This is not part of the public api!
///
/// Any changes to this module are semver-exempt!
#[doc(hidden)]
pub mod private {
    #[cold]
    #[inline(never)]
    #[cfg(feature = "panic-on-alloc")]
    pub const fn capacity_overflow() -> ! {
        panic!("capacity overflow");
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_array(method: &'static str) -> ! {
    panic!("{method}() called on an empty array")
}

// this is just `Result::into_ok` but with a name to match our use case
#[inline(always)]
#[cfg(feature = "panic-on-alloc")]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

trait SizedTypeProperties: Sized {
    const SIZE: usize = mem::size_of::<Self>();
    const ALIGN: usize = mem::align_of::<Self>();

    const IS_ZST: bool = mem::size_of::<Self>() == 0;
}

impl<T> SizedTypeProperties for T {}

macro_rules! wrap_result {
    ($ok:ty, $err:ty) => { Result<$ok, $err> };
    (, $err:ty) => { Result<(), $err> };
}

pub(crate) use wrap_result;

/// Writes a method once as `generic_*::<B: ErrorBehavior>` and exposes it as a panicking
/// `method` and a fallible `try_method`.
macro_rules! error_behavior_generic_methods_if {
    (
        if $fail_if:literal

        $(
            $(#[$attr:meta])*
            $(do panics $(#[doc = $panics:literal])*)?
            impl

            $(do examples $(#[doc = $infallible_examples:literal])*)?
            for fn $infallible:ident

            $(do examples $(#[doc = $fallible_examples:literal])*)?
            for fn $fallible:ident

            use fn $generic:ident
            $(<{$($generic_params:tt)*}>)?
            (
                $(&mut $self_mut:ident ,)?
                $($arg_pat:ident: $arg_ty:ty),* $(,)?
            )
            $(-> $return_ty:ty)?
            $(where { $($where:tt)* } in)?
            {
                $($body:tt)*
            }
        )*
    ) => {
        $(
            $(#[$attr])*

            /// # Panics
            #[doc = concat!("Panics if ", $fail_if, ".")]
            $(#[doc = "\n"] $(#[doc = $panics])*)?

            $(#[doc = "\n"] #[doc = "# Examples"] $(#[doc = $infallible_examples])*)?

            #[inline(always)]
            #[cfg(feature = "panic-on-alloc")]
            pub fn $infallible
            $(<$($generic_params)*>)?
            ($(&mut $self_mut,)?  $($arg_pat: $arg_ty),*) $(-> $return_ty)?
            $(where $($where)*)?
            {
                $crate::infallible(Self::$generic($($self_mut,)? $($arg_pat),*))
            }
        )*

        $(
            $(#[$attr])*

            $(#[doc = "\n"] #[doc = "# Panics"] $(#[doc = $panics])*)?

            /// # Errors
            #[doc = concat!("Errors if ", $fail_if, ".")]

            $(#[doc = "\n"] #[doc = "# Examples"] $(#[doc = $fallible_examples])*)?

            #[inline(always)]
            pub fn $fallible
            $(<$($generic_params)*>)?
            ($(&mut $self_mut,)? $($arg_pat: $arg_ty),*)
            -> $crate::wrap_result!($($return_ty)?, $crate::alloc::AllocError)
            $(where $($where)*)?
            {
                Self::$generic($($self_mut,)? $($arg_pat),*)
            }
        )*

        $(
            $(#[$attr])*
            #[inline]
            pub(crate) fn $generic
            <B: ErrorBehavior $(, $($generic_params)*)?>
            ($(&mut $self_mut,)? $($arg_pat: $arg_ty),*)
            -> $crate::wrap_result!($($return_ty)?, B)
            $(where $($where)*)?
            {
                $($body)*
            }
        )*
    };
}

pub(crate) use error_behavior_generic_methods_if;

macro_rules! error_behavior_generic_methods_allocation_failure {
    ($($tt:tt)*) => {
        $crate::error_behavior_generic_methods_if!(if "the allocation fails or the capacity overflows" $($tt)*);
    };
}

pub(crate) use error_behavior_generic_methods_allocation_failure;
