use core::ptr::{self, NonNull};

// Putting the expression in a function helps llvm to realize that it can initialize the value
// at this pointer instead of allocating it on the stack and then copying it over.
#[inline(always)]
pub(crate) unsafe fn write_with<T>(ptr: NonNull<T>, f: impl FnOnce() -> T) {
    unsafe { ptr::write(ptr.as_ptr(), f()) };
}

/// Drops the elements in `start..end` behind `ptr`.
///
/// If a destructor panics, the remaining elements are still dropped.
///
/// # Safety
/// The elements in `start..end` must be initialized and must not be used afterwards.
#[inline(always)]
pub(crate) unsafe fn drop_range<T>(ptr: NonNull<T>, start: usize, end: usize) {
    debug_assert!(start <= end);

    unsafe {
        let first = ptr.as_ptr().add(start);
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
    }
}
