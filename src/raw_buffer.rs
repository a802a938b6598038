use core::{marker::PhantomData, ptr::NonNull};

use crate::{
    ErrorBehavior, SizedTypeProperties,
    alloc::{Allocator, Global, Layout},
};

/// An owned, uninitialized allocation for `capacity` values of `T`.
///
/// This type only manages memory. It never reads, writes or drops a `T`;
/// which slots are initialized is tracked by its owner.
///
/// Zero-sized layouts (`capacity == 0` or a zero-sized `T`) are not allocated,
/// their pointer is dangling but well-aligned.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// A buffer without an allocation.
    pub(crate) const EMPTY: Self = Self {
        ptr: NonNull::dangling(),
        capacity: 0,
        marker: PhantomData,
    };

    pub(crate) fn generic_allocate<E: ErrorBehavior>(capacity: usize) -> Result<Self, E> {
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => return Err(E::capacity_overflow()),
        };

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                marker: PhantomData,
            });
        }

        match Global.allocate(layout) {
            Ok(ptr) => Ok(Self {
                ptr: ptr.cast(),
                capacity,
                marker: PhantomData,
            }),
            Err(_) => Err(E::allocation(layout)),
        }
    }

    #[inline(always)]
    pub(crate) const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn is_allocated(&self) -> bool {
        !T::IS_ZST && self.capacity != 0
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            unsafe {
                // we already allocated that amount so this can't overflow
                let layout = Layout::from_size_align_unchecked(self.capacity * T::SIZE, T::ALIGN);
                Global.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}
