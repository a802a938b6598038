//! Memory allocation types used by this crate.
//!
//! These come from [`allocator_api2`]. Element storage is always allocated from [`Global`].

pub use ::allocator_api2::alloc::{AllocError, Allocator, Global, Layout, handle_alloc_error};
