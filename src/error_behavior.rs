#[cfg(feature = "panic-on-alloc")]
use crate::{Infallible, alloc::handle_alloc_error, capacity_overflow};
use crate::alloc::{AllocError, Layout};

/// Decides what an allocating operation does when it can't get its memory.
///
/// `Infallible` panics or aborts, `AllocError` is returned to the caller.
pub(crate) trait ErrorBehavior: Sized {
    fn allocation(layout: Layout) -> Self;
    fn capacity_overflow() -> Self;
}

#[cfg(feature = "panic-on-alloc")]
impl ErrorBehavior for Infallible {
    #[inline(always)]
    fn allocation(layout: Layout) -> Self {
        handle_alloc_error(layout)
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        capacity_overflow()
    }
}

impl ErrorBehavior for AllocError {
    #[inline(always)]
    fn allocation(_: Layout) -> Self {
        Self
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        Self
    }
}
